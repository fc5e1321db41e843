use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";

pub const KEYS: &[&str] = &["data-file", "page-size"];

/// Configuration for addrbook, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File name of the book, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Page size used by `show all` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<NonZeroUsize>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: None,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddrBookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "page-size" => Some(
                self.page_size
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "off".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a key from its textual value. `page-size` accepts a positive
    /// number, or `off` to list everything at once.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(AddrBookError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "page-size" => {
                self.page_size = match value.trim() {
                    "off" | "0" => None,
                    v => Some(v.parse().map_err(|_| {
                        AddrBookError::Config(format!("page-size must be a number, got {}", v))
                    })?),
                };
            }
            other => {
                return Err(AddrBookError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
