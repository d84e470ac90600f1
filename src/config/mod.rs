//! Configuration
//!
//! Layered configuration for the chart viewer: built-in defaults, a global
//! file in the platform config directory, a workspace `orgchart.toml`, and
//! `ORGCHART__*` environment variables, in increasing precedence.

mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::tree::STANDARD_DEPARTMENTS;
use crate::views::ZoomLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgChartConfig {
    /// Dataset path used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    /// Department set offered by the department filter
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_departments() -> Vec<String> {
    STANDARD_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

impl Default for OrgChartConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            departments: default_departments(),
            view: ViewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_zoom_percent")]
    pub zoom_percent: u32,
    #[serde(default = "default_zoom_min")]
    pub zoom_min: u32,
    #[serde(default = "default_zoom_max")]
    pub zoom_max: u32,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: u32,
    /// Colorize matches in text output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_zoom_percent() -> u32 {
    60
}

fn default_zoom_min() -> u32 {
    50
}

fn default_zoom_max() -> u32 {
    200
}

fn default_zoom_step() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_percent: default_zoom_percent(),
            zoom_min: default_zoom_min(),
            zoom_max: default_zoom_max(),
            zoom_step: default_zoom_step(),
            color: default_true(),
        }
    }
}

impl ViewConfig {
    pub fn zoom(&self) -> ZoomLevel {
        ZoomLevel::new(self.zoom_percent, self.zoom_min, self.zoom_max, self.zoom_step)
    }
}
