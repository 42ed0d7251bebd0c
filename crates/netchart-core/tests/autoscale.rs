// File: crates/netchart-core/tests/autoscale.rs
// Purpose: Validate per-axis range resolution over mixed left/right series.

use netchart_core::{AxisRange, AxisSide, ChartOptions, Color, LineChart, RecordingSurface};

fn chart(opts: ChartOptions) -> LineChart<RecordingSurface> {
    LineChart::with_surface(RecordingSurface::new(640, 360), opts)
}

#[test]
fn autoscale_mixed_axes() {
    let mut c = chart(ChartOptions::default());
    c.add_series("loss", Color::WHITE, "%", AxisSide::Left);
    c.add_series("avail", Color::WHITE, "%", AxisSide::Left);
    c.add_series("latency", Color::WHITE, "ms", AxisSide::Right);
    c.set_series_data("loss", [Some(2.0), None, Some(7.5)]);
    c.set_series_data("avail", [92.5, 100.0]);
    c.set_series_data("latency", [31.0, 12.0]);

    let axes = c.resolve_axes();
    assert!(axes.show_left);
    assert_eq!(axes.left, AxisRange::new(0.0, 100.0));
    assert_eq!(axes.right, AxisRange::new(0.0, 31.0));
}

#[test]
fn fallbacks_without_data() {
    let mut c = chart(ChartOptions::default());
    c.add_series("latency", Color::WHITE, "ms", AxisSide::Right);
    let axes = c.resolve_axes();
    assert!(!axes.show_left);
    assert_eq!(axes.left, AxisRange::new(0.0, 1.0));
    assert_eq!(axes.right, AxisRange::new(0.0, 100.0));
}

#[test]
fn configured_bounds_override_pool() {
    let opts = ChartOptions::default()
        .with_left_bounds(Some(0.0), Some(100.0))
        .with_right_bounds(Some(10.0), None);
    let mut c = chart(opts);
    c.add_series("avail", Color::WHITE, "%", AxisSide::Left);
    c.add_series("latency", Color::WHITE, "ms", AxisSide::Right);
    c.set_series_data("avail", [250.0]);
    c.set_series_data("latency", [55.0, 80.0]);

    let axes = c.resolve_axes();
    assert_eq!(axes.left, AxisRange::new(0.0, 100.0));
    assert_eq!(axes.right, AxisRange::new(10.0, 80.0));
}

#[test]
fn truncated_samples_drop_out_of_pool() {
    let mut c = chart(ChartOptions::default().with_max_points(2));
    c.add_series("latency", Color::WHITE, "ms", AxisSide::Right);
    c.set_series_data("latency", [900.0, 20.0, 30.0]);
    assert_eq!(c.resolve_axes().right.max, 30.0);
}
