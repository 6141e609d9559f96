pub mod schema;

pub use schema::{ConfigFile, OutputFormat, Overrides, RunConfig, DEFAULT_ROOT};

use batt_core::{BattError, Result};
use std::path::{Path, PathBuf};

/// Load defaults from a TOML file. Returns `ConfigFile::default()` if the
/// file doesn't exist, so running without any config is the normal case.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("no config file at '{}'; using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    read(path)
}

/// Load a file the user asked for explicitly; a missing file is an error.
pub fn load_required(path: impl AsRef<Path>) -> Result<ConfigFile> {
    read(path.as_ref())
}

fn read(path: &Path) -> Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| BattError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let file: ConfigFile = toml::from_str(&raw)
        .map_err(|e| BattError::Config(format!("TOML parse error in '{}': {e}", path.display())))?;
    tracing::debug!("loaded config from '{}'", path.display());
    Ok(file)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("batteryinfo").join("batteryinfo.toml")
}
