use thiserror::Error;

/// Failure to turn a descriptor into a gateway instance.
///
/// Raised by the construction facility and passed through the registry untouched.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Unknown gateway class '{0}'")]
    UnknownClass(String),
    #[error("Gateway descriptor has neither a class nor an id")]
    MissingClass,
    #[error("Gateway '{id}' is missing required parameter '{param}'")]
    MissingParameter { id: String, param: String },
    #[error("Gateway '{id}' has an invalid parameter '{param}': {reason}")]
    InvalidParameter {
        id: String,
        param: String,
        reason: String,
    },
    #[error("Gateway '{id}' could not be constructed: {source}")]
    Construction {
        id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unknown gateway '{0}'.")]
    UnknownGateway(String),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
