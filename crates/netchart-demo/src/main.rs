// File: crates/netchart-demo/src/main.rs
// Summary: Replays a ping log through the uptime metrics, draws the dual-axis dashboard chart, writes a PNG.

mod dashboard;
mod ping_log;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use netchart_core::metrics::{availability_percent, HealthBand, MetricsTimeline, PingHistory, PING_INTERVAL_SECS};
use netchart_core::{ChartOptions, Color, LineChart, RasterSurface};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "netchart-demo", about = "Render a network availability/latency chart from a ping log")]
struct Args {
    /// Ping log CSV with columns ts,ip,online,latency_ms. A synthetic fleet is used when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/netchart.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 960)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Chart options JSON (gridColor, textColor, maxPoints, padding, leftMin, leftMax, rightMin, rightMax).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Devices in the synthetic fleet.
    #[arg(long, default_value_t = 8)]
    devices: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let opts = match &args.options {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ChartOptions::from_json(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        // Percentages live on the left axis, pinned to 0..100.
        None => ChartOptions::default().with_left_bounds(Some(0.0), Some(100.0)),
    };

    let samples = match &args.input {
        Some(path) => ping_log::load_csv(path)
            .with_context(|| format!("failed to load ping log '{}'", path.display()))?,
        None => {
            let ticks = opts.max_points.min(ping_log::MAX_SYNTHETIC_TICKS);
            let span = chrono::Duration::seconds(PING_INTERVAL_SECS as i64 * ticks as i64);
            let start = chrono::Utc::now() - span;
            log::info!("no input given; synthesizing {} devices over {ticks} ticks", args.devices);
            ping_log::synthesize(args.devices, ticks, start)
        }
    };
    if samples.is_empty() {
        anyhow::bail!("ping log has no rows");
    }

    let ticks = ping_log::group_by_tick(samples);
    let mut history = PingHistory::default();
    let mut timeline = MetricsTimeline::new(opts.max_points);
    for (ts, statuses) in &ticks {
        history.record(*ts, statuses.iter().map(|(ip, s)| (ip.as_str(), *s)));
        timeline.push_tick(*ts, statuses.values());
    }
    log::info!("replayed {} ticks across {} devices", ticks.len(), history.devices().count());

    let surface = RasterSurface::new(args.width, args.height)?.with_background(Color::from_rgb(18, 18, 20));
    let mut chart = LineChart::with_surface(surface, opts);
    dashboard::register_series(&mut chart);
    dashboard::apply_timeline(&timeline, &mut chart);
    chart.draw();

    chart
        .surface_mut()
        .context("chart lost its surface")?
        .write_png(&args.out)?;
    log::info!("wrote {}", args.out.display());

    if let Some((_, latest)) = ticks.last() {
        let pct = availability_percent(latest.values().map(|s| s.online));
        log::info!("current availability {pct}% ({:?})", HealthBand::from_percent(pct as f64));
    }
    match history.worst_device() {
        Some(worst) if worst.uptime < 100.0 => {
            log::warn!("worst device {} at {}% uptime", worst.ip, worst.uptime)
        }
        Some(_) => log::info!("all devices stable"),
        None => log::info!("no history yet"),
    }
    for (ip, summary) in history.summary() {
        log::debug!("{ip}: {}% over {} samples", summary.uptime, summary.samples);
    }

    Ok(())
}
