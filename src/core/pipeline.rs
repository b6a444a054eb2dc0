use crate::core::extract::extract_codepoints;
use crate::core::format::render;
use crate::core::{CodepointList, ConfigProvider, Pipeline, Sink};
use crate::utils::error::Result;
use reqwest::Client;

pub struct CodepointPipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
    client: Client,
}

impl<S: Sink, C: ConfigProvider> CodepointPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            sink,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Sink, C: ConfigProvider> Pipeline for CodepointPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let property = self.config.property();
        let url = property.list_url(self.config.endpoint())?;

        tracing::debug!("Requesting {} list from: {}", property, url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("List service response status: {}", status);
        if !status.is_success() {
            tracing::warn!("List service answered {}, scanning the body anyway", status);
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }

    async fn transform(&self, body: String) -> Result<CodepointList> {
        let codepoints = extract_codepoints(&body);
        let line = render(&codepoints);

        tracing::info!(
            "Extracted {} {} code points",
            codepoints.len(),
            self.config.property()
        );

        Ok(CodepointList { codepoints, line })
    }

    async fn load(&self, list: CodepointList) -> Result<String> {
        self.sink.write_line(&list.line).await?;
        Ok(self.sink.destination())
    }
}
