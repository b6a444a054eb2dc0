use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, format and write in order and returns where the line went.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Fetching code point list...");
        let body = self.pipeline.extract().await?;

        tracing::debug!("Formatting code points...");
        let list = self.pipeline.transform(body).await?;

        tracing::debug!("Writing {} literals...", list.codepoints.len());
        let destination = self.pipeline.load(list).await?;
        tracing::debug!("Output written to: {}", destination);

        Ok(destination)
    }
}
