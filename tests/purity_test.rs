//! Every display helper returns the same output when called twice with the same input.

use badnode_display::{
    derive_status_label, format_bytes, format_thousands, lookup_network, parse_client_version,
    status_to_color,
};

#[test]
fn test_parse_client_version_is_repeatable() {
    for raw in ["Geth/v1.10.2/linux-amd64/go1.16", "NoSlashVersion", "", "a/b/c"] {
        assert_eq!(parse_client_version(raw), parse_client_version(raw));
    }
}

#[test]
fn test_lookup_network_is_repeatable() {
    for id in [1u64, 3, 4, 42, 56, 9999] {
        assert_eq!(lookup_network(id), lookup_network(id));
    }
}

#[test]
fn test_format_thousands_is_repeatable() {
    for value in ["0", "1234567", "-98765.4321", "abc"] {
        assert_eq!(format_thousands(value), format_thousands(value));
    }
}

#[test]
fn test_format_bytes_is_repeatable() {
    for bytes in [None, Some(0u64), Some(1), Some(2_147_483_648), Some(u64::MAX)] {
        assert_eq!(format_bytes(bytes), format_bytes(bytes));
    }
}

#[test]
fn test_status_helpers_are_repeatable() {
    for listening in [true, false] {
        for syncing in [true, false] {
            assert_eq!(
                derive_status_label(listening, syncing),
                derive_status_label(listening, syncing)
            );
        }
    }
    for status in ["Syncing", "Listening", "Stopped", "Unknown", ""] {
        assert_eq!(status_to_color(status), status_to_color(status));
    }
}
