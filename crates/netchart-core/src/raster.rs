// File: crates/netchart-core/src/raster.rs
// Summary: DrawSurface backed by a Skia CPU raster surface, with PNG and RGBA8 readback.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawSurface, TextAlign};
use crate::text::TextShaper;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn allocate(width: u32, height: u32) -> Result<skia::Surface, SurfaceError> {
    let (w, h) = (width.max(1), height.max(1));
    skia::surfaces::raster_n32_premul((w as i32, h as i32))
        .ok_or(SurfaceError::Allocate { width: w, height: h })
}

/// Offscreen raster target. The logical size is what the chart lays out at;
/// the backing buffer follows it on every `resize`.
pub struct RasterSurface {
    surface: skia::Surface,
    logical: (u32, u32),
    background: Color,
    shaper: TextShaper,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: allocate(width, height)?,
            logical: (width, height),
            background: Color::TRANSPARENT,
            shaper: TextShaper::new(),
        })
    }

    /// Fill color applied whenever the backing buffer is reallocated.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self.surface.canvas().clear(to_skia(background));
        self
    }

    pub fn set_logical_size(&mut self, width: u32, height: u32) {
        self.logical = (width, height);
    }

    /// Backing buffer size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.surface.width() as u32, self.surface.height() as u32)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write a PNG, creating parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, tightly packed. Returns (pixels, width, height).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32), SurfaceError> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(SurfaceError::ReadPixels);
        }
        Ok((pixels, w, h))
    }
}

impl DrawSurface for RasterSurface {
    fn logical_size(&self) -> (u32, u32) {
        self.logical
    }

    fn resize(&mut self, width: u32, height: u32) {
        match allocate(width, height) {
            Ok(surface) => self.surface = surface,
            Err(e) => {
                log::error!("keeping previous raster buffer: {e}");
            }
        }
        self.surface.canvas().clear(to_skia(self.background));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_path(&mut self, points: &[Point], color: Color, width: f32) {
        let Some((first, rest)) = points.split_first() else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(to_skia(color));
        self.surface.canvas().draw_path(&path, &stroke);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn fill_text(&mut self, text: &str, at: Point, align: TextAlign, size: f32, color: Color) {
        let canvas = self.surface.canvas();
        self.shaper.draw_aligned(canvas, text, at.x, at.y, size, to_skia(color), align);
    }
}
