use std::path::{Path, PathBuf};
use std::time::Duration;

use ftk_lib::{Config, FtkError};

pub const FILE_KEY_ENV: &str = "FIGMA_FILE_KEY";

/// Resolved settings after merging CLI args, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub file_key: String,
    pub output_path: PathBuf,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

/// `--file-key` > `FIGMA_FILE_KEY` > config (which carries the built-in default).
pub fn resolve_file_key(cli: Option<String>, env: Option<String>, config: &Config) -> String {
    cli.filter(|k| !k.trim().is_empty())
        .or_else(|| env.filter(|k| !k.trim().is_empty()))
        .unwrap_or_else(|| config.file_key.clone())
}

pub fn resolve_settings(
    cli_file_key: Option<String>,
    cli_output: Option<PathBuf>,
    default_output: PathBuf,
    config: &Config,
) -> ResolvedSettings {
    let env_key = std::env::var(FILE_KEY_ENV).ok();
    ResolvedSettings {
        file_key: resolve_file_key(cli_file_key, env_key, config),
        output_path: cli_output.unwrap_or(default_output),
        base_url: config.base_url.clone(),
        timeout: config.timeout,
    }
}

/// Load config from an explicit path, `./ftk.toml`, or return defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, FtkError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ftk_lib::config::CONFIG_FILE_NAME.to_string());
        FtkError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FtkError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective settings as a single-line string.
pub fn format_effective_settings(settings: &ResolvedSettings, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: file_key={}, output={}, base_url={}, timeout={}",
        settings.file_key,
        settings.output_path.display(),
        settings.base_url,
        settings
            .timeout
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "none".to_string())
    )
}
