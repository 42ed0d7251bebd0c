// File: crates/netchart-core/src/options.rs
// Summary: Static chart configuration with dashboard defaults, JSON loading and validation.

use serde::{Deserialize, Serialize};

use crate::axis::AxisBounds;
use crate::color::Color;
use crate::error::OptionsError;
use crate::types::{DEFAULT_MAX_POINTS, DEFAULT_PADDING};

/// Construction-time options. Keys are camelCase in JSON; absent keys take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub grid_color: Color,
    pub text_color: Color,
    /// Window size N: samples and labels kept per update.
    pub max_points: usize,
    /// Inset from every surface edge to the plot area, in pixels.
    pub padding: f32,
    pub left_min: Option<f64>,
    pub left_max: Option<f64>,
    pub right_min: Option<f64>,
    pub right_max: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            grid_color: Color::from_rgba(255, 255, 255, 13), // rgba(255,255,255,0.05)
            text_color: Color::from_rgb(0xc0, 0xc0, 0xc0),
            max_points: DEFAULT_MAX_POINTS,
            padding: DEFAULT_PADDING,
            left_min: None,
            left_max: None,
            right_min: None,
            right_max: None,
        }
    }
}

impl ChartOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_points == 0 {
            return Err(OptionsError::ZeroWindow);
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(OptionsError::Padding(self.padding));
        }
        Ok(())
    }

    pub fn left_bounds(&self) -> AxisBounds {
        AxisBounds::new(self.left_min, self.left_max)
    }

    pub fn right_bounds(&self) -> AxisBounds {
        AxisBounds::new(self.right_min, self.right_max)
    }

    pub fn with_max_points(mut self, n: usize) -> Self {
        self.max_points = n;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_left_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.left_min = min;
        self.left_max = max;
        self
    }

    pub fn with_right_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.right_min = min;
        self.right_max = max;
        self
    }
}
