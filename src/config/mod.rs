#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::{XidProperty, DEFAULT_ENDPOINT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

/// Effective settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub property: XidProperty,
    pub timeout_seconds: Option<u64>,
    pub output_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            property: XidProperty::Start,
            timeout_seconds: None,
            output_path: None,
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(endpoint) = toml.endpoint() {
            self.endpoint = endpoint.to_string();
        }
        if let Some(property) = toml.property() {
            self.property = property;
        }
        if let Some(timeout) = toml.timeout_seconds() {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(path) = toml.output_path() {
            self.output_path = Some(path.to_string());
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(property) = cli.property {
            self.property = property;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(path) = &cli.output {
            self.output_path = Some(path.clone());
        }
        self
    }

    /// Loads the TOML file named by `--config`, if any, and applies the flags on top.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = &cli.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml = TomlConfig::from_file(path)?;
            settings = settings.merge_toml(&toml);
        }

        Ok(settings.merge_cli(cli))
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn property(&self) -> XidProperty {
        self.property
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        if let Some(path) = &self.output_path {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}
