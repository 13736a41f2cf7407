use model::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the configuration file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the configuration file: {0}")]
    ConfigDeserialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(#[from] ConfigError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
