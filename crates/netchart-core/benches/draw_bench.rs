use netchart_core::{AxisSide, ChartOptions, Color, LineChart, RasterSurface, RecordingSurface};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize) -> Vec<Option<f64>> {
    (0..n)
        .map(|i| if i % 17 == 5 { None } else { Some((i as f64 * 0.2).sin() * 20.0 + 40.0) })
        .collect()
}

fn fill<S: netchart_core::DrawSurface>(chart: &mut LineChart<S>, n: usize) {
    chart.add_series("Availability %", Color::from_rgb(0x2e, 0xcc, 0x71), "%", AxisSide::Left);
    chart.add_series("Latency (ms)", Color::from_rgb(0x34, 0x98, 0xdb), "ms", AxisSide::Right);
    chart.set_series_data("Availability %", gen_values(n));
    chart.set_series_data("Latency (ms)", gen_values(n).into_iter().rev());
    chart.set_labels((0..n).map(|i| format!("t{i}")));
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    for &n in &[60usize, 600usize] {
        group.bench_with_input(BenchmarkId::new("recording", n), &n, |b, &n| {
            let opts = ChartOptions::default().with_max_points(n);
            let mut chart = LineChart::with_surface(RecordingSurface::new(800, 300), opts);
            fill(&mut chart, n);
            b.iter(|| {
                chart.draw();
                black_box(chart.surface().map(|s| s.calls().len()));
            });
        });
        group.bench_with_input(BenchmarkId::new("raster", n), &n, |b, &n| {
            let opts = ChartOptions::default().with_max_points(n);
            let surface = RasterSurface::new(800, 300).expect("raster surface");
            let mut chart = LineChart::with_surface(surface, opts);
            fill(&mut chart, n);
            b.iter(|| chart.draw());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
