// File: crates/netchart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms from data space to plot-area pixels.

use crate::axis::AxisRange;
use crate::geometry::Rect;

/// Horizontal scale spreading `count` index slots evenly across the plot width.
/// A single slot is pinned to the left edge rather than centered.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub step_px: f32,
}

impl IndexScale {
    pub fn new(plot: &Rect, count: usize) -> Self {
        let slots = count.saturating_sub(1).max(1);
        Self { left_px: plot.left, step_px: plot.width() / slots as f32 }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + self.step_px * index as f32
    }
}

/// Vertical value scale mapping an axis range onto [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub range: AxisRange,
}

impl ValueScale {
    pub fn new(plot: &Rect, range: AxisRange) -> Self {
        Self { top_px: plot.top, bottom_px: plot.bottom, range }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let n = self.range.normalize(v) as f32;
        self.bottom_px - n * (self.bottom_px - self.top_px)
    }
}
