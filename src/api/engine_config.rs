use serde::{Deserialize, Serialize};

use crate::core::{Viewport, YScale};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Y limits are given as
/// `(bottom-edge value, top-edge value)`: a standard Skew-T passes
/// `y_bottom = 1050.0`, `y_top = 100.0` for an inverted log pressure axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewChartConfig {
    pub viewport: Viewport,
    pub x_min: f64,
    pub x_max: f64,
    pub y_bottom: f64,
    pub y_top: f64,
    #[serde(default)]
    pub y_scale: YScale,
    #[serde(default = "default_shear_deg")]
    pub shear_deg: f64,
    #[serde(default = "default_x_tick_step")]
    pub x_tick_step: f64,
    #[serde(default = "default_y_tick_levels")]
    pub y_tick_levels: Vec<f64>,
    #[serde(default = "default_projection")]
    pub projection: String,
}

impl SkewChartConfig {
    /// Creates a config with the standard Skew-T defaults: 30 degree shear,
    /// log-10 pressure axis, 10-unit temperature ticks, 100 hPa pressure
    /// graduations.
    #[must_use]
    pub fn new(viewport: Viewport, x_min: f64, x_max: f64, y_bottom: f64, y_top: f64) -> Self {
        Self {
            viewport,
            x_min,
            x_max,
            y_bottom,
            y_top,
            y_scale: YScale::default(),
            shear_deg: default_shear_deg(),
            x_tick_step: default_x_tick_step(),
            y_tick_levels: default_y_tick_levels(),
            projection: default_projection(),
        }
    }

    #[must_use]
    pub fn with_y_scale(mut self, y_scale: YScale) -> Self {
        self.y_scale = y_scale;
        self
    }

    #[must_use]
    pub fn with_shear_deg(mut self, shear_deg: f64) -> Self {
        self.shear_deg = shear_deg;
        self
    }

    #[must_use]
    pub fn with_x_tick_step(mut self, x_tick_step: f64) -> Self {
        self.x_tick_step = x_tick_step;
        self
    }

    #[must_use]
    pub fn with_y_tick_levels(mut self, y_tick_levels: Vec<f64>) -> Self {
        self.y_tick_levels = y_tick_levels;
        self
    }

    #[must_use]
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }
}

fn default_shear_deg() -> f64 {
    30.0
}

fn default_x_tick_step() -> f64 {
    10.0
}

fn default_y_tick_levels() -> Vec<f64> {
    (1..=10).map(|level| f64::from(level) * 100.0).collect()
}

fn default_projection() -> String {
    crate::axes::SKEWX_PROJECTION.to_owned()
}
