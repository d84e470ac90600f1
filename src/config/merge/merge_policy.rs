//! Base layer of every merge: the serialized built-in defaults.

use crate::config::OrgChartConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder whose lowest layer is `OrgChartConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&OrgChartConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
