use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// StockDB configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
  /// Server listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// RocksDB data directory; records are kept in memory only when unset
  #[serde(default)]
  pub data_path: Option<String>,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:7878".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      data_path: None,
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

    let config: Config = toml::from_str(&config_str)
      .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

    Ok(config)
  }
}
