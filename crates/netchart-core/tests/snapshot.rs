// File: crates/netchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic dual-axis chart to PNG bytes on the raster surface.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the pixel compare to ease first run.
// No goldens are checked in: text goes through the system font manager, so goldens
// are per-machine. Until a bless run writes them, each test only checks that the
// render decodes at the expected size and is not a flat background.

use netchart_core::{AxisSide, ChartOptions, Color, LineChart, RasterSurface};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let got = image::load_from_memory(bytes).expect("decode render").to_rgba8();
    assert_eq!(got.dimensions(), (480, 240));
    let background = got.get_pixel(0, 0);
    assert!(got.pixels().any(|p| p != background), "render is a flat fill");

    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes<F: FnOnce(&mut LineChart<RasterSurface>)>(build: F) -> Vec<u8> {
    let surface = RasterSurface::new(480, 240)
        .expect("raster surface")
        .with_background(Color::from_rgb(18, 18, 20));
    let mut chart = LineChart::with_surface(surface, ChartOptions::default().with_max_points(10));
    build(&mut chart);
    chart.draw();
    chart.surface_mut().unwrap().encode_png().expect("png bytes")
}

#[test]
fn golden_dual_axis() {
    let bytes = render_bytes(|c| {
        c.add_series("Availability %", Color::from_rgb(0x2e, 0xcc, 0x71), "%", AxisSide::Left);
        c.add_series("Latency (ms)", Color::from_rgb(0x34, 0x98, 0xdb), "ms", AxisSide::Right);
        c.set_series_data("Availability %", [100.0, 100.0, 50.0, 75.0, 100.0]);
        c.set_series_data("Latency (ms)", [Some(12.0), Some(14.0), None, Some(30.0), Some(11.0)]);
        c.set_labels(["10:00", "10:01", "10:02", "10:03", "10:04"]);
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/dual_axis.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_right_only_flat() {
    let bytes = render_bytes(|c| {
        c.add_series("Flat", Color::from_rgb(0xe7, 0x4c, 0x3c), "", AxisSide::Right);
        c.set_series_data("Flat", [0.0, 0.0, 0.0]);
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/right_only_flat.png");
    write_or_compare(&path, &bytes);
}
