pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSink, StdoutSink};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::{etl::EtlEngine, pipeline::CodepointPipeline};
pub use domain::model::{
    Codepoint, CodepointList, XidProperty, DEFAULT_ENDPOINT, XID_CONTINUE_URL, XID_START_URL,
};
pub use utils::error::{FetchError, Result};
