//! Chain metadata
//!
//! Static table of known EVM networks keyed by chain ID, plus an immutable
//! registry that can extend the built-in table with configured networks.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::error::Error;

/// Opaque reference to a display asset; resolving it to an image is up to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(Cow<'static, str>);

impl IconRef {
    /// Reference a compile-time asset path
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn new(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icon shared by every built-in network
pub const ETHEREUM_ICON: IconRef = IconRef::from_static("assets/img/etherum-ico.png");

/// Display metadata for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// Chain ID
    pub id: u64,
    /// Human-readable network name
    pub label: Cow<'static, str>,
    /// Icon asset reference
    #[serde(default = "default_icon")]
    pub icon: IconRef,
    /// Native currency symbol (e.g. ETH, BNB)
    pub currency_symbol: Cow<'static, str>,
}

fn default_icon() -> IconRef {
    ETHEREUM_ICON
}

impl NetworkDescriptor {
    /// Build a descriptor at compile time
    pub const fn builtin(id: u64, label: &'static str, currency_symbol: &'static str) -> Self {
        Self {
            id,
            label: Cow::Borrowed(label),
            icon: ETHEREUM_ICON,
            currency_symbol: Cow::Borrowed(currency_symbol),
        }
    }

    /// Build a descriptor from runtime values
    pub fn new(
        id: u64,
        label: impl Into<String>,
        icon: IconRef,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: Cow::Owned(label.into()),
            icon,
            currency_symbol: Cow::Owned(currency_symbol.into()),
        }
    }
}

/// Networks known to the dashboard out of the box. Order is significant for lookups.
pub static BUILTIN_NETWORKS: [NetworkDescriptor; 5] = [
    NetworkDescriptor::builtin(1, "Mainnet", "ETH"),
    NetworkDescriptor::builtin(3, "Ropsten", "ETH"),
    NetworkDescriptor::builtin(42, "Kovan", "ETH"),
    NetworkDescriptor::builtin(4, "Rinkeby", "ETH"),
    NetworkDescriptor::builtin(56, "Binance Smart Chain Mainnet", "BNB"),
];

/// Anything a chain ID can be read from.
///
/// Conversion is permissive: strings are trimmed and may be decimal, `0x`/`0o`/`0b`
/// prefixed, or an integral float such as `"56.0"`. Values that are negative,
/// fractional, or not numbers at all yield `None`.
pub trait ChainIdInput {
    fn to_chain_id(&self) -> Option<u64>;
}

impl<T: ChainIdInput + ?Sized> ChainIdInput for &T {
    fn to_chain_id(&self) -> Option<u64> {
        (**self).to_chain_id()
    }
}

macro_rules! impl_chain_id_integer {
    ($($t:ty),*) => {
        $(impl ChainIdInput for $t {
            fn to_chain_id(&self) -> Option<u64> {
                u64::try_from(*self).ok()
            }
        })*
    };
}

impl_chain_id_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ChainIdInput for f64 {
    fn to_chain_id(&self) -> Option<u64> {
        let value = *self;
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
            Some(value as u64)
        } else {
            None
        }
    }
}

impl ChainIdInput for str {
    fn to_chain_id(&self) -> Option<u64> {
        coerce_chain_id(self)
    }
}

impl ChainIdInput for String {
    fn to_chain_id(&self) -> Option<u64> {
        coerce_chain_id(self)
    }
}

fn coerce_chain_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        // An empty string reads as zero, which no network uses
        return Some(0);
    }

    let radix = match trimmed.get(..2).map(|p| p.to_ascii_lowercase()) {
        Some(prefix) if prefix == "0x" => Some(16),
        Some(prefix) if prefix == "0o" => Some(8),
        Some(prefix) if prefix == "0b" => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        // from_str_radix tolerates a leading sign, prefixed literals do not
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok();
    }

    if let Ok(id) = trimmed.parse::<u64>() {
        return Some(id);
    }

    // Reject spellings like "inf" or "NaN" that f64 parsing would accept
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(|v| v.to_chain_id())
}

/// Strictly parse a chain ID. Unlike [`ChainIdInput`], blank input is rejected.
pub fn parse_chain_id(raw: &str) -> Result<u64, Error> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidChainId(raw.to_string()));
    }
    coerce_chain_id(raw).ok_or_else(|| Error::InvalidChainId(raw.to_string()))
}

/// Find the built-in network for a chain ID, if any.
pub fn lookup_network<C: ChainIdInput>(chain_id: C) -> Option<&'static NetworkDescriptor> {
    let id = chain_id.to_chain_id()?;
    let found = BUILTIN_NETWORKS.iter().find(|network| network.id == id);
    if found.is_none() {
        debug!(chain_id = id, "no built-in network for chain ID");
    }
    found
}

/// Like [`lookup_network`], but reports why nothing was found.
pub fn try_lookup_network(raw: &str) -> Result<&'static NetworkDescriptor, Error> {
    let id = parse_chain_id(raw)?;
    lookup_network(id).ok_or(Error::UnknownNetwork(id))
}

/// Immutable set of networks: the built-in table followed by configured extras.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDescriptor>,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NetworkRegistry {
    /// Registry over the built-in table only
    pub fn builtin() -> Self {
        Self {
            networks: BUILTIN_NETWORKS.to_vec(),
        }
    }

    /// Built-in networks plus `extra`, rejecting any repeated chain ID
    pub fn with_networks(extra: impl IntoIterator<Item = NetworkDescriptor>) -> Result<Self, Error> {
        let mut networks = BUILTIN_NETWORKS.to_vec();
        networks.extend(extra);

        let mut seen = HashSet::with_capacity(networks.len());
        for network in &networks {
            if !seen.insert(network.id) {
                return Err(Error::DuplicateChainId(network.id));
            }
        }

        debug!(count = networks.len(), "network registry built");
        Ok(Self { networks })
    }

    /// Registry described by a loaded configuration
    pub fn from_config(config: &DisplayConfig) -> Result<Self, Error> {
        Self::with_networks(config.networks.iter().cloned())
    }

    /// Find the first network registered for a chain ID
    pub fn lookup<C: ChainIdInput>(&self, chain_id: C) -> Option<&NetworkDescriptor> {
        let id = chain_id.to_chain_id()?;
        self.networks.iter().find(|network| network.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.networks.iter()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_contents() {
        let ids: Vec<u64> = BUILTIN_NETWORKS.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 42, 4, 56]);
        assert!(BUILTIN_NETWORKS.iter().all(|n| n.icon == ETHEREUM_ICON));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let unique: HashSet<u64> = BUILTIN_NETWORKS.iter().map(|n| n.id).collect();
        assert_eq!(unique.len(), BUILTIN_NETWORKS.len());
    }

    #[test]
    fn test_chain_id_coercion() {
        assert_eq!("56".to_chain_id(), Some(56));
        assert_eq!(" 42 ".to_chain_id(), Some(42));
        assert_eq!("0x38".to_chain_id(), Some(56));
        assert_eq!("0X38".to_chain_id(), Some(56));
        assert_eq!("56.0".to_chain_id(), Some(56));
        assert_eq!("5.6e1".to_chain_id(), Some(56));
        assert_eq!("".to_chain_id(), Some(0));
        assert_eq!("56.5".to_chain_id(), None);
        assert_eq!("abc".to_chain_id(), None);
        assert_eq!("inf".to_chain_id(), None);
        assert_eq!((-1i32).to_chain_id(), None);
        assert_eq!(4.0f64.to_chain_id(), Some(4));
        assert_eq!(f64::NAN.to_chain_id(), None);
    }

    #[test]
    fn test_prefixed_chain_id_rejects_sign_and_bad_digits() {
        assert_eq!("0x+38".to_chain_id(), None);
        assert_eq!("0x+1".to_chain_id(), None);
        assert_eq!("0b+1".to_chain_id(), None);
        assert_eq!("0x-1".to_chain_id(), None);
        assert_eq!("0x".to_chain_id(), None);
        assert_eq!("0b102".to_chain_id(), None);
        assert_eq!("0o70".to_chain_id(), Some(56));
        assert_eq!("0b111000".to_chain_id(), Some(56));
        assert!(lookup_network("0x+38").is_none());
        assert!(matches!(parse_chain_id("0x+38"), Err(Error::InvalidChainId(_))));
    }

    #[test]
    fn test_parse_chain_id_rejects_blank() {
        assert!(matches!(parse_chain_id("  "), Err(Error::InvalidChainId(_))));
        assert!(matches!(parse_chain_id("main"), Err(Error::InvalidChainId(_))));
        assert_eq!(parse_chain_id("1").unwrap(), 1);
    }
}
