use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::HttpError(_) => ErrorCategory::Network,
            FetchError::IoError(_) => ErrorCategory::Io,
            FetchError::UrlError(_)
            | FetchError::ConfigError { .. }
            | FetchError::ConfigValidationError { .. }
            | FetchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Io => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::HttpError(e) if e.is_timeout() => {
                "Increase --timeout or retry when the service is less busy"
            }
            FetchError::HttpError(_) => {
                "Check network connectivity and that the endpoint is reachable"
            }
            FetchError::IoError(_) => "Check that the output path is writable",
            FetchError::UrlError(_) => "Pass an absolute http(s) URL to --endpoint",
            FetchError::ConfigError { .. } | FetchError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            FetchError::InvalidConfigValueError { .. } => {
                "Fix the offending option or configuration key"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
