use serde::Serialize;
use std::path::Path;

use crate::Result;

/// Write `value` as 2-space pretty JSON, creating parent directories and
/// replacing any previous file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "wrote JSON output");
    Ok(())
}
