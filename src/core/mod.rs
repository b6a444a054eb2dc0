pub mod etl;
pub mod extract;
pub mod format;
pub mod pipeline;

pub use crate::domain::model::{Codepoint, CodepointList};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
