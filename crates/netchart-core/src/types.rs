// File: crates/netchart-core/src/types.rs
// Summary: Shared constants (window size, padding, tick count, layout offsets, fonts).

/// Default number of most-recent samples/labels retained per chart.
pub const DEFAULT_MAX_POINTS: usize = 60;
/// Default inset between the surface edge and the plot area, in pixels.
pub const DEFAULT_PADDING: f32 = 30.0;

/// Grid lines and ticks per Y axis, including both plot-area boundaries.
pub const TICK_COUNT: usize = 6;

/// Left-axis maximum when no left series has numeric data.
pub const LEFT_FALLBACK_MAX: f64 = 1.0;
/// Right-axis maximum when no right series has numeric data.
pub const RIGHT_FALLBACK_MAX: f64 = 100.0;

pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const AXIS_LINE_WIDTH: f32 = 1.0;
pub const SERIES_LINE_WIDTH: f32 = 2.5;
pub const MARKER_RADIUS: f32 = 2.0;

pub const TICK_FONT_SIZE: f32 = 12.0;
pub const X_TICK_FONT_SIZE: f32 = 11.0;
pub const CAPTION_FONT_SIZE: f32 = 12.0;
pub const LEGEND_FONT_SIZE: f32 = 12.0;

/// Gap between the plot area and right-aligned left tick labels.
pub const LEFT_TICK_GAP: f32 = 8.0;
/// Gap between the plot area and left-aligned right tick labels.
pub const RIGHT_TICK_GAP: f32 = 12.0;
/// Baseline nudge so tick text sits vertically centered on its grid line.
pub const TICK_BASELINE_NUDGE: f32 = 4.0;
pub const X_TICK_OFFSET: f32 = 18.0;
pub const CAPTION_OFFSET: f32 = 36.0;

/// Legend anchor distance from the right surface edge.
pub const LEGEND_RIGHT_OFFSET: f32 = 200.0;
pub const LEGEND_SWATCH: f32 = 12.0;
pub const LEGEND_TEXT_GAP: f32 = 16.0;
pub const LEGEND_BASELINE: f32 = 10.0;
pub const LEGEND_ROW_HEIGHT: f32 = 18.0;
