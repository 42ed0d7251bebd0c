// File: crates/netchart-core/src/lib.rs
// Summary: Core library entry point; exports the dual-axis line chart, drawing surfaces and uptime metrics.

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod metrics;
pub mod options;
pub mod raster;
pub mod recording;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod types;

pub use axis::{AxisBounds, AxisRange, AxisSide, ResolvedAxes};
pub use chart::LineChart;
pub use color::Color;
pub use error::{ColorParseError, OptionsError, ParseAxisError, SurfaceError};
pub use geometry::{Point, Rect};
pub use metrics::{DeviceStatus, HealthBand, MetricsTimeline, PingHistory};
pub use options::ChartOptions;
pub use raster::RasterSurface;
pub use recording::{DrawCall, RecordingSurface};
pub use series::{Sample, Series};
pub use surface::{DrawSurface, TextAlign};
pub use text::TextShaper;
