//! Global config file: `<platform config dir>/orgchart/config.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::PathBuf;

/// Path of the global config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "orgchart")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global file layer when it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.is_file() => Ok(builder.add_source(File::from(path).required(false))),
        _ => Ok(builder),
    }
}
