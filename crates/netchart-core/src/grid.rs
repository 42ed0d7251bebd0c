// File: crates/netchart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `count` tick values from `max` at the top down to `min`, each computed
/// directly so the ends land exactly on the range bounds.
pub fn tick_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 { return vec![max, min]; }
    let last = (count - 1) as f64;
    (0..count).map(|i| min + (max - min) * (count - 1 - i) as f64 / last).collect()
}

/// Stride for sparse X tick labels so roughly six labels are shown.
pub fn label_stride(count: usize) -> usize {
    (count / 6).max(1)
}

/// Tick label text: one decimal place.
pub fn format_tick(value: f64) -> String {
    format!("{value:.1}")
}
