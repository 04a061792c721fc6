pub mod chain;
pub mod config;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod status;

pub use chain::{
    lookup_network, parse_chain_id, try_lookup_network, ChainIdInput, IconRef,
    NetworkDescriptor, NetworkRegistry, BUILTIN_NETWORKS, ETHEREUM_ICON,
};
pub use crate::config::DisplayConfig;
pub use error::Error;
pub use formatting::{format_bytes, format_thousands, parse_client_version, ClientVersion};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use status::{
    derive_status_label, status_to_color, NodeStatus, StatusPalette, FALLBACK_COLOR,
};
