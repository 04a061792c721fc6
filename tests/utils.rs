use badnode_display::DisplayConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Sample display config with one extra network and a custom palette
    pub const SAMPLE_CONFIG: &str = r##"
[palette]
syncing = "#00AA00"

[[networks]]
id = 137
label = "Polygon Mainnet"
icon = "assets/img/polygon-ico.png"
currency_symbol = "MATIC"

[[networks]]
id = 97
label = "Binance Smart Chain Testnet"
currency_symbol = "tBNB"
"##;

    /// Write `content` to `display.toml` in a fresh temp directory.
    /// The directory is deleted when the returned guard is dropped.
    pub fn write_temp_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("display.toml");
        fs::write(&path, content).expect("Failed to write test config");
        (dir, path)
    }

    /// Load the sample config from disk
    #[allow(dead_code)]
    pub fn load_sample_config() -> DisplayConfig {
        let (_dir, path) = write_temp_config(SAMPLE_CONFIG);
        DisplayConfig::load(&path).expect("Failed to load sample config")
    }
}
