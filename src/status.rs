//! Node status labels and colors
//!
//! A node is `Syncing` or `Listening` while its P2P listener is up, and `Stopped`
//! otherwise. Each label has a fixed display color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

pub const SYNCING_COLOR: &str = "#86C956";
pub const LISTENING_COLOR: &str = "#FFB800";
pub const STOPPED_COLOR: &str = "#E84E40";
/// Color for anything that is not a known status label
pub const FALLBACK_COLOR: &str = "#1A130F";

/// Status shown for a node on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    Syncing,
    Listening,
    Stopped,
}

impl NodeStatus {
    /// Classify a node from its `net_listening` and `eth_syncing` flags.
    ///
    /// Syncing is only consulted while the node is listening.
    pub fn from_flags(is_listening: bool, is_syncing: bool) -> Self {
        if is_listening {
            if is_syncing {
                NodeStatus::Syncing
            } else {
                NodeStatus::Listening
            }
        } else {
            NodeStatus::Stopped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Syncing => "Syncing",
            NodeStatus::Listening => "Listening",
            NodeStatus::Stopped => "Stopped",
        }
    }

    /// Default display color
    pub fn color(&self) -> &'static str {
        match self {
            NodeStatus::Syncing => SYNCING_COLOR,
            NodeStatus::Listening => LISTENING_COLOR,
            NodeStatus::Stopped => STOPPED_COLOR,
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeStatus {
    type Err = Error;

    /// Exact, case-sensitive match on the status label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Syncing" => Ok(NodeStatus::Syncing),
            "Listening" => Ok(NodeStatus::Listening),
            "Stopped" => Ok(NodeStatus::Stopped),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Status label for a node's listening/syncing flags
pub fn derive_status_label(is_listening: bool, is_syncing: bool) -> NodeStatus {
    NodeStatus::from_flags(is_listening, is_syncing)
}

/// Display color for a status label; unknown labels get [`FALLBACK_COLOR`].
pub fn status_to_color(status: &str) -> &'static str {
    status
        .parse::<NodeStatus>()
        .map(|s| s.color())
        .unwrap_or(FALLBACK_COLOR)
}

/// Status colors, overridable from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPalette {
    pub syncing: String,
    pub listening: String,
    pub stopped: String,
    pub fallback: String,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            syncing: SYNCING_COLOR.to_string(),
            listening: LISTENING_COLOR.to_string(),
            stopped: STOPPED_COLOR.to_string(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }
}

impl StatusPalette {
    pub fn color(&self, status: NodeStatus) -> &str {
        match status {
            NodeStatus::Syncing => &self.syncing,
            NodeStatus::Listening => &self.listening,
            NodeStatus::Stopped => &self.stopped,
        }
    }

    /// Same matching rules as [`status_to_color`], using this palette
    pub fn color_for(&self, status: &str) -> &str {
        match status.parse::<NodeStatus>() {
            Ok(status) => self.color(status),
            Err(_) => &self.fallback,
        }
    }

    /// Check that every entry is a `#RRGGBB` hex color
    pub fn validate(&self) -> Result<(), Error> {
        let entries = [
            ("syncing", &self.syncing),
            ("listening", &self.listening),
            ("stopped", &self.stopped),
            ("fallback", &self.fallback),
        ];

        for (field, value) in entries {
            if !is_hex_color(value) {
                warn!(field, value = value.as_str(), "rejecting palette color");
                return Err(Error::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
