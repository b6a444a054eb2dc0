use crate::domain::model::{CodepointList, XidProperty};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for the rendered line.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable name of where the line ends up.
    fn destination(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn property(&self) -> XidProperty;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, body: String) -> Result<CodepointList>;
    async fn load(&self, list: CodepointList) -> Result<String>;
}
