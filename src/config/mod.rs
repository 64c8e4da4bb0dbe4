//! # Configuration Management Module
//!
//! Configuration for the decoder: the channel-hash lookup table and logging
//! settings, loaded from a TOML file with sensible defaults when the file is
//! absent.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [channels]
//! # channel hash byte (two-digit uppercase hex) -> human readable name
//! 11 = "#public"
//! D9 = "#test"
//! # add more as you discover them, e.g. 2A = "#boats"
//!
//! [logging]
//! level = "info"
//! file = "meshscope.log"   # optional; omit to log to stderr only
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use meshscope::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     assert_eq!(config.channel_name(0x11), "#public");
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::fs;

/// Channel name reported for hashes with no configured mapping.
pub const UNKNOWN_CHANNEL: &str = "#unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Channel hash byte (two-digit uppercase hex) to human-readable `#name`.
    #[serde(default = "default_channels")]
    pub channels: HashMap<String, String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

fn default_channels() -> HashMap<String, String> {
    let mut channels = HashMap::new();
    channels.insert("11".to_string(), "#public".to_string());
    channels.insert("D9".to_string(), "#test".to_string());
    channels
}

impl Default for Config {
    fn default() -> Self {
        Config {
            channels: default_channels(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Resolve a channel hash byte to its configured name, falling back to
    /// [`UNKNOWN_CHANNEL`]. Keys are matched as two-digit uppercase hex.
    pub fn channel_name(&self, hash: u8) -> &str {
        self.channels
            .get(format!("{:02X}", hash).as_str())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CHANNEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channel_map() {
        let config = Config::default();
        assert_eq!(config.channel_name(0x11), "#public");
        assert_eq!(config.channel_name(0xD9), "#test");
        assert_eq!(config.channel_name(0x2A), UNKNOWN_CHANNEL);
    }

    #[test]
    fn toml_round_trip_preserves_channels() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.channel_name(0x11), "#public");
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.channel_name(0x11), "#public");
        assert_eq!(parsed.logging.file, None);
    }

    #[test]
    fn explicit_channel_table_replaces_defaults() {
        let parsed: Config = toml::from_str(
            r##"
[channels]
2A = "#boats"
"##,
        )
        .unwrap();
        assert_eq!(parsed.channel_name(0x2A), "#boats");
        // An explicit [channels] table replaces the defaults entirely.
        assert_eq!(parsed.channel_name(0x11), UNKNOWN_CHANNEL);
    }
}
