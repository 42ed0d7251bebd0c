// File: crates/netchart-core/src/axis.rs
// Summary: Y-axis sides, configured bounds, and range resolution against per-axis data pools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseAxisError;

/// Which Y axis a series is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    #[default]
    Right,
}

impl FromStr for AxisSide {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Configured bounds; `None` means "derive at draw time".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisBounds {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Resolve against the numeric samples of every series on this axis.
    /// Unset min is 0; unset max is the pool maximum, or `fallback_max` for an empty pool.
    pub fn resolve(&self, pool: &[f64], fallback_max: f64) -> AxisRange {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or_else(|| {
            pool.iter().copied().reduce(f64::max).unwrap_or(fallback_max)
        });
        AxisRange::new(min, max)
    }
}

/// Effective range of one axis for a single draw.
/// `max > min` is not guaranteed; a zero-width range normalizes with span 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }

    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Both axes as resolved for a draw, plus whether the left axis is rendered at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedAxes {
    pub left: AxisRange,
    pub right: AxisRange,
    pub show_left: bool,
}

impl ResolvedAxes {
    pub fn range(&self, side: AxisSide) -> AxisRange {
        match side {
            AxisSide::Left => self.left,
            AxisSide::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_max_from_pool() {
        let r = AxisBounds::default().resolve(&[10.0, 40.0, 25.0], 100.0);
        assert_eq!(r, AxisRange::new(0.0, 40.0));
    }

    #[test]
    fn empty_pool_uses_fallback() {
        assert_eq!(AxisBounds::default().resolve(&[], 1.0), AxisRange::new(0.0, 1.0));
    }

    #[test]
    fn configured_bounds_win() {
        let r = AxisBounds::new(Some(5.0), Some(50.0)).resolve(&[500.0], 1.0);
        assert_eq!(r, AxisRange::new(5.0, 50.0));
    }

    #[test]
    fn zero_span_normalizes_to_zero() {
        let r = AxisRange::new(5.0, 5.0);
        assert_eq!(r.span(), 1.0);
        assert_eq!(r.normalize(5.0), 0.0);
    }

    #[test]
    fn side_parsing() {
        assert_eq!("Left".parse::<AxisSide>().unwrap(), AxisSide::Left);
        assert_eq!(" right ".parse::<AxisSide>().unwrap(), AxisSide::Right);
        assert!("top".parse::<AxisSide>().is_err());
        assert_eq!(AxisSide::default(), AxisSide::Right);
    }
}
