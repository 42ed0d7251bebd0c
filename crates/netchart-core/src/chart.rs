// File: crates/netchart-core/src/chart.rs
// Summary: Dual-axis line chart: series/label state and the full redraw pipeline onto a DrawSurface.

use crate::axis::{AxisRange, AxisSide, ResolvedAxes};
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::grid::{format_tick, label_stride, linspace, tick_values};
use crate::options::ChartOptions;
use crate::scale::{IndexScale, ValueScale};
use crate::series::{last_n, Sample, Series};
use crate::surface::{DrawSurface, TextAlign};
use crate::types::*;

/// Line chart with a left and a right Y axis over a shared index-based X axis.
///
/// The chart owns its surface. Built without one, it keeps accepting data but
/// `draw` does nothing.
pub struct LineChart<S> {
    surface: Option<S>,
    options: ChartOptions,
    series: Vec<Series>,
    labels: Vec<String>,
}

impl<S: DrawSurface> LineChart<S> {
    pub fn new(surface: Option<S>, options: ChartOptions) -> Self {
        let mut options = options;
        if options.max_points == 0 {
            log::warn!("maxPoints of 0 replaced with default {DEFAULT_MAX_POINTS}");
            options.max_points = DEFAULT_MAX_POINTS;
        }
        if surface.is_none() {
            log::debug!("line chart has no drawing surface; draw() is a no-op");
        }
        Self { surface, options, series: Vec::new(), labels: Vec::new() }
    }

    pub fn with_surface(surface: S, options: ChartOptions) -> Self {
        Self::new(Some(surface), options)
    }

    pub fn detached(options: ChartOptions) -> Self {
        Self::new(None, options)
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Window size N.
    pub fn window(&self) -> usize {
        self.options.max_points
    }

    /// Register `name` with empty data. Reusing a name replaces that entry
    /// (dropping its data) but keeps its legend position.
    pub fn add_series(
        &mut self,
        name: impl Into<String>,
        color: Color,
        unit: impl Into<String>,
        axis: AxisSide,
    ) {
        let series = Series::new(name, color, unit, axis);
        match self.series.iter_mut().find(|s| s.name == series.name) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    /// Replace the samples of a registered series with the last N `values`.
    /// Unknown names are ignored.
    pub fn set_series_data<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Sample>,
    {
        let window = self.options.max_points;
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(series) => series.replace_samples(values, window),
            None => log::trace!("ignoring data for unregistered series `{name}`"),
        }
    }

    /// Replace the shared X labels with the last N entries.
    pub fn set_labels<I, L>(&mut self, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.labels = last_n(labels.into_iter().map(Into::into), self.options.max_points);
    }

    /// Series in registration order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get_series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn samples(&self, name: &str) -> Option<&[Sample]> {
        self.get_series(name).map(|s| s.samples.as_slice())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn into_surface(self) -> Option<S> {
        self.surface
    }

    /// Axis ranges the next `draw` will use, derived from configured bounds and
    /// the numeric samples of every series on each side.
    pub fn resolve_axes(&self) -> ResolvedAxes {
        let mut left_pool = Vec::new();
        let mut right_pool = Vec::new();
        for s in &self.series {
            let pool = match s.axis {
                AxisSide::Left => &mut left_pool,
                AxisSide::Right => &mut right_pool,
            };
            pool.extend(s.numeric());
        }
        ResolvedAxes {
            left: self.options.left_bounds().resolve(&left_pool, LEFT_FALLBACK_MAX),
            right: self.options.right_bounds().resolve(&right_pool, RIGHT_FALLBACK_MAX),
            show_left: !left_pool.is_empty(),
        }
    }

    /// Redraw everything onto the surface, sized to its current logical size.
    pub fn draw(&mut self) {
        if self.surface.is_none() {
            log::trace!("draw skipped: no surface");
            return;
        }
        let axes = self.resolve_axes();
        let Some(surface) = self.surface.as_mut() else { return };
        let opts = &self.options;

        let (width, height) = surface.logical_size();
        surface.resize(width, height);

        let bounds = Rect::from_xywh(0.0, 0.0, width as f32, height as f32);
        let plot = bounds.inset(opts.padding);

        draw_grid(surface, &plot, opts.grid_color);

        if axes.show_left {
            draw_y_ticks(surface, &plot, axes.left, plot.left - LEFT_TICK_GAP, TextAlign::Right, opts.text_color);
            draw_vline(surface, &plot, plot.left, opts.text_color);
        }
        draw_y_ticks(surface, &plot, axes.right, plot.right + RIGHT_TICK_GAP, TextAlign::Left, opts.text_color);
        draw_vline(surface, &plot, plot.right, opts.text_color);

        // X axis
        surface.stroke_path(
            &[Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom)],
            opts.text_color,
            AXIS_LINE_WIDTH,
        );

        if !self.labels.is_empty() {
            draw_x_labels(surface, &plot, &self.labels, opts.text_color);
        }

        for s in &self.series {
            draw_line_series(surface, &plot, axes.range(s.axis), s);
        }

        draw_legend(surface, width as f32 - LEGEND_RIGHT_OFFSET, opts.padding, &self.series, opts.text_color);
        log::trace!("drew {} series at {}x{}", self.series.len(), width, height);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid<S: DrawSurface>(surface: &mut S, plot: &Rect, color: Color) {
    for y in linspace(plot.top as f64, plot.bottom as f64, TICK_COUNT) {
        let y = y as f32;
        surface.stroke_path(&[Point::new(plot.left, y), Point::new(plot.right, y)], color, GRID_LINE_WIDTH);
    }
}

fn draw_vline<S: DrawSurface>(surface: &mut S, plot: &Rect, x: f32, color: Color) {
    surface.stroke_path(&[Point::new(x, plot.top), Point::new(x, plot.bottom)], color, AXIS_LINE_WIDTH);
}

/// Tick labels from `range.max` at the top to `range.min` at the bottom.
fn draw_y_ticks<S: DrawSurface>(
    surface: &mut S,
    plot: &Rect,
    range: AxisRange,
    x: f32,
    align: TextAlign,
    color: Color,
) {
    let values = tick_values(range.min, range.max, TICK_COUNT);
    let ys = linspace(plot.top as f64, plot.bottom as f64, TICK_COUNT);
    for (v, y) in values.into_iter().zip(ys) {
        let at = Point::new(x, y as f32 + TICK_BASELINE_NUDGE);
        surface.fill_text(&format_tick(v), at, align, TICK_FONT_SIZE, color);
    }
}

fn draw_x_labels<S: DrawSurface>(surface: &mut S, plot: &Rect, labels: &[String], color: Color) {
    let xs = IndexScale::new(plot, labels.len());
    let y = plot.bottom + X_TICK_OFFSET;
    for (i, label) in labels.iter().enumerate().step_by(label_stride(labels.len())) {
        surface.fill_text(label, Point::new(xs.to_px(i), y), TextAlign::Center, X_TICK_FONT_SIZE, color);
    }

    let (Some(first), Some(last)) = (labels.first(), labels.last()) else { return };
    if first.is_empty() || last.is_empty() {
        return;
    }
    let caption = format!("{first} → {last}");
    let at = Point::new(plot.left + plot.width() / 2.0, plot.bottom + CAPTION_OFFSET);
    surface.fill_text(&caption, at, TextAlign::Center, CAPTION_FONT_SIZE, color);
}

/// Polyline through the numeric samples plus a marker per point. Missing
/// samples keep their X slot; the line joins their neighbours.
fn draw_line_series<S: DrawSurface>(surface: &mut S, plot: &Rect, range: AxisRange, series: &Series) {
    if series.samples.is_empty() {
        return;
    }
    let xs = IndexScale::new(plot, series.samples.len());
    let ys = ValueScale::new(plot, range);
    let points: Vec<Point> = series
        .samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.value().map(|v| Point::new(xs.to_px(i), ys.to_px(v))))
        .collect();

    surface.stroke_path(&points, series.color, SERIES_LINE_WIDTH);
    for p in &points {
        surface.fill_circle(*p, MARKER_RADIUS, series.color);
    }
}

fn draw_legend<S: DrawSurface>(surface: &mut S, x: f32, y: f32, series: &[Series], text_color: Color) {
    for (row, s) in series.iter().enumerate() {
        let top = y + row as f32 * LEGEND_ROW_HEIGHT;
        surface.fill_rect(Rect::from_xywh(x, top, LEGEND_SWATCH, LEGEND_SWATCH), s.color);
        let at = Point::new(x + LEGEND_TEXT_GAP, top + LEGEND_BASELINE);
        surface.fill_text(&s.name, at, TextAlign::Left, LEGEND_FONT_SIZE, text_color);
    }
}
