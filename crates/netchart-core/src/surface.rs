// File: crates/netchart-core/src/surface.rs
// Summary: Minimal immediate-mode drawing capability the chart renders onto.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// 2-D drawing primitives in logical pixels. `y` of text is the baseline.
pub trait DrawSurface {
    /// Size the surface is laid out at (what the chart should fill).
    fn logical_size(&self) -> (u32, u32);
    /// Reallocate the backing buffer at `width` x `height`. Clears prior content.
    fn resize(&mut self, width: u32, height: u32);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke an open polyline through `points`; fewer than two points draws nothing.
    fn stroke_path(&mut self, points: &[Point], color: Color, width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: Color);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn logical_size(&self) -> (u32, u32) { (**self).logical_size() }
    fn resize(&mut self, width: u32, height: u32) { (**self).resize(width, height) }
    fn fill_rect(&mut self, rect: Rect, color: Color) { (**self).fill_rect(rect, color) }
    fn stroke_path(&mut self, points: &[Point], color: Color, width: f32) {
        (**self).stroke_path(points, color, width)
    }
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        (**self).fill_circle(center, radius, color)
    }
    fn fill_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: Color) {
        (**self).fill_text(text, at, align, size, color)
    }
}
