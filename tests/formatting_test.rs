use badnode_display::{format_bytes, format_thousands, parse_client_version, ClientVersion};

#[test]
fn test_client_version_uses_last_segment() {
    // The version comes from the last segment, which for a full Geth string is the Go toolchain
    assert_eq!(
        parse_client_version("Geth/v1.10.2/linux-amd64/go1.16"),
        "Geth 1.16"
    );
    assert_eq!(parse_client_version("Geth/v1.10.2"), "Geth 1.10.2");
}

#[test]
fn test_client_version_without_slash() {
    assert_eq!(parse_client_version("NoSlashVersion"), "NoSlashVersion ");
    assert_eq!(parse_client_version("v2.0.1"), "v2.0.1 2.0.1");
}

#[test]
fn test_client_version_struct() {
    let version = ClientVersion::parse("besu/v23.4.1/linux-x86_64/openjdk-java-17");
    assert_eq!(version.client, "besu");
    assert_eq!(version.version, "17");
    assert_eq!(version.to_string(), "besu 17");
}

#[test]
fn test_client_version_serializes_for_web() {
    let version = ClientVersion::parse("Geth/v1.10.2");
    let json = serde_json::to_value(&version).expect("Failed to serialize client version");
    assert_eq!(json["client"], "Geth");
    assert_eq!(json["version"], "1.10.2");
}

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(1234567), "1,234,567");
    assert_eq!(format_thousands(12345678901u64), "12,345,678,901");
    assert_eq!(format_thousands("15537394"), "15,537,394");
    assert_eq!(format_thousands(1234567.89), "1,234,567.89");
    assert_eq!(format_thousands(12), "12");
}

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0u64), "N/A");
    assert_eq!(format_bytes(None::<u64>), "N/A");
    assert_eq!(format_bytes(2_147_483_648u64), "2.00 GB");
    assert_eq!(format_bytes(Some(536_870_912u64)), "0.50 GB");
    assert_eq!(format_bytes(1_610_612_736u64), "1.50 GB");
}
