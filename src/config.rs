use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// File key used when neither the CLI, the environment nor a config file names one.
pub const DEFAULT_FILE_KEY: &str = "Qm3xLrZ9vJb1TnP7kYc0Wd";
/// Node exported by `ftk screen` when no node id is given.
pub const DEFAULT_NODE_ID: &str = "1:2";
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com";
pub const CONFIG_FILE_NAME: &str = "ftk.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub file_key: String,
    pub node_id: String,
    pub output_dir: PathBuf,
    pub tokens_file: String,
    pub screen_file: String,
    pub base_url: String,
    /// Total request timeout; unset leaves the HTTP client default (none).
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_key: DEFAULT_FILE_KEY.to_string(),
            node_id: DEFAULT_NODE_ID.to_string(),
            output_dir: PathBuf::from("theme"),
            tokens_file: "figma-tokens.json".to_string(),
            screen_file: "screen-data.json".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load from an explicit path, else `./ftk.toml` when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if !local.is_file() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tokens_file.trim().is_empty() {
            return Err("tokens_file must not be empty".into());
        }
        if self.screen_file.trim().is_empty() {
            return Err("screen_file must not be empty".into());
        }
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".into());
        }
        if matches!(self.timeout, Some(t) if t.is_zero()) {
            return Err("timeout must be greater than zero".into());
        }
        Ok(())
    }

    pub fn tokens_path(&self) -> PathBuf {
        self.output_dir.join(&self.tokens_file)
    }

    pub fn screen_path(&self) -> PathBuf {
        self.output_dir.join(&self.screen_file)
    }
}
