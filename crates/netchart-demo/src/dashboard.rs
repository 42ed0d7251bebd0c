// File: crates/netchart-demo/src/dashboard.rs
// Summary: Wires the metrics timeline into the dashboard chart's three series.

use netchart_core::metrics::MetricsTimeline;
use netchart_core::{AxisSide, Color, DrawSurface, LineChart};

pub const AVAILABILITY_SERIES: &str = "Availability %";
pub const PACKET_LOSS_SERIES: &str = "Packet Loss %";
pub const LATENCY_SERIES: &str = "Latency (ms)";

/// Percentages on the left axis, latency on the right.
pub fn register_series<S: DrawSurface>(chart: &mut LineChart<S>) {
    chart.add_series(AVAILABILITY_SERIES, Color::from_rgb(0x2e, 0xcc, 0x71), "%", AxisSide::Left);
    chart.add_series(PACKET_LOSS_SERIES, Color::from_rgb(0xe7, 0x4c, 0x3c), "%", AxisSide::Left);
    chart.add_series(LATENCY_SERIES, Color::from_rgb(0x34, 0x98, 0xdb), "ms", AxisSide::Right);
}

/// Replace the chart's data and labels with the timeline.
pub fn apply_timeline<S: DrawSurface>(timeline: &MetricsTimeline, chart: &mut LineChart<S>) {
    chart.set_series_data(AVAILABILITY_SERIES, timeline.availability());
    chart.set_series_data(PACKET_LOSS_SERIES, timeline.packet_loss());
    chart.set_series_data(LATENCY_SERIES, timeline.latency());
    chart.set_labels(timeline.labels());
}
