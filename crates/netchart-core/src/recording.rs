// File: crates/netchart-core/src/recording.rs
// Summary: Recording DrawSurface that captures draw calls for verification in tests.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawSurface, TextAlign};

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    FillRect { rect: Rect, color: Color },
    StrokePath { points: Vec<Point>, color: Color, width: f32 },
    FillCircle { center: Point, radius: f32, color: Color },
    FillText { text: String, at: Point, align: TextAlign, size: f32, color: Color },
}

/// Surface that draws nothing and remembers every call since the last `resize`,
/// mirroring how resizing a canvas discards its pixels.
///
/// ```
/// use netchart_core::{AxisSide, ChartOptions, Color, LineChart, RecordingSurface};
///
/// let mut chart = LineChart::new(Some(RecordingSurface::new(400, 200)), ChartOptions::default());
/// chart.add_series("Latency", Color::WHITE, "ms", AxisSide::Right);
/// chart.set_series_data("Latency", [1.0, 2.0]);
/// chart.draw();
/// assert_eq!(chart.surface().unwrap().circles().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    /// Change the layout size without touching the recording (like a CSS resize).
    pub fn set_logical_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text draws as `(text, position, align)`.
    pub fn texts(&self) -> Vec<(&str, Point, TextAlign)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillText { text, at, align, .. } => Some((text.as_str(), *at, *align)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Point, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillCircle { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(&[Point], Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokePath { points, color, .. } => Some((points.as_slice(), *color)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn logical_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.clear();
        self.calls.push(DrawCall::Resize { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_path(&mut self, points: &[Point], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.calls.push(DrawCall::StrokePath { points: points.to_vec(), color, width });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.calls.push(DrawCall::FillCircle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: Color) {
        self.calls.push(DrawCall::FillText { text: text.to_string(), at, align, size, color });
    }
}
