//! Zoom level of the rendered chart, in whole percent.

use serde::{Deserialize, Serialize};

/// Clamped zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomLevel {
    percent: u32,
    min: u32,
    max: u32,
    step: u32,
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self {
            percent: 60,
            min: 50,
            max: 200,
            step: 10,
        }
    }
}

impl ZoomLevel {
    /// Build a zoom level; `percent` is clamped into `[min, max]`.
    pub fn new(percent: u32, min: u32, max: u32, step: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            percent: percent.clamp(min, max),
            min,
            max,
            step: step.max(1),
        }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    pub fn zoom_in(&mut self) -> u32 {
        self.percent = (self.percent + self.step).min(self.max);
        self.percent
    }

    pub fn zoom_out(&mut self) -> u32 {
        self.percent = self.percent.saturating_sub(self.step).max(self.min);
        self.percent
    }

    /// Indentation width in columns for one tree level at this zoom.
    pub fn indent_width(&self) -> usize {
        ((4 * self.percent as usize) / 100).max(1)
    }
}
