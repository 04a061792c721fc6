use thiserror::Error;

/// Display layer error type
#[derive(Error, Debug)]
pub enum Error {
    /// Chain identifier could not be read as a number
    #[error("Invalid chain ID: {0:?}")]
    InvalidChainId(String),

    /// Chain identifier is well formed but no network is registered for it
    #[error("Unknown network for chain ID {0}")]
    UnknownNetwork(u64),

    /// Status label is not one of Syncing, Listening or Stopped
    #[error("Unknown node status: {0:?}")]
    UnknownStatus(String),

    /// Palette entry is not a #RRGGBB color
    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// Two registry entries share a chain ID
    #[error("Duplicate chain ID in network registry: {0}")]
    DuplicateChainId(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Layered configuration loader error
    #[error("Configuration loader error: {0}")]
    ConfigLoader(#[from] config::ConfigError),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
