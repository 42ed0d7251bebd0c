// File: crates/netchart-core/src/series.rs
// Summary: Sample values and the named, colored, axis-bound series model.

use crate::axis::AxisSide;
use crate::color::Color;

/// One slot of a series. Resolved once when data enters the chart:
/// non-finite numbers, `null` and non-numeric JSON all become `Missing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Numeric(f64),
    Missing,
}

impl Sample {
    pub fn value(&self) -> Option<f64> {
        match *self {
            Sample::Numeric(v) => Some(v),
            Sample::Missing => None,
        }
    }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Self {
        if v.is_finite() { Sample::Numeric(v) } else { Sample::Missing }
    }
}

impl From<f32> for Sample {
    fn from(v: f32) -> Self {
        Sample::from(v as f64)
    }
}

impl From<Option<f64>> for Sample {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Sample::Missing, Sample::from)
    }
}

impl From<&serde_json::Value> for Sample {
    fn from(v: &serde_json::Value) -> Self {
        v.as_f64().map_or(Sample::Missing, Sample::from)
    }
}

impl From<serde_json::Value> for Sample {
    fn from(v: serde_json::Value) -> Self {
        Sample::from(&v)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color,
    pub unit: String,
    pub axis: AxisSide,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Color, unit: impl Into<String>, axis: AxisSide) -> Self {
        Self { name: name.into(), color, unit: unit.into(), axis, samples: Vec::new() }
    }

    /// Numeric values only, in order; missing slots are dropped.
    pub fn numeric(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(Sample::value)
    }

    /// Replace samples with the last `window` entries of `values`.
    pub fn replace_samples<I, V>(&mut self, values: I, window: usize)
    where
        I: IntoIterator<Item = V>,
        V: Into<Sample>,
    {
        self.samples = last_n(values.into_iter().map(Into::into), window);
    }
}

/// Collect an iterator keeping only its last `n` items.
pub fn last_n<T>(items: impl Iterator<Item = T>, n: usize) -> Vec<T> {
    let mut v: Vec<T> = items.collect();
    let excess = v.len().saturating_sub(n);
    v.drain(..excess);
    v
}
