// File: crates/netchart-demo/src/ping_log.rs
// Summary: Ping log loading (CSV), deterministic synthesis, and grouping into poll ticks.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use netchart_core::metrics::{DeviceStatus, PING_INTERVAL_SECS};
use serde::Deserialize;

/// One probe of one device.
#[derive(Clone, Debug, PartialEq)]
pub struct PingSample {
    pub ts: DateTime<Utc>,
    pub ip: String,
    pub status: DeviceStatus,
}

/// Statuses of every device probed at one instant, keyed by address.
pub type Tick = (DateTime<Utc>, BTreeMap<String, DeviceStatus>);

#[derive(Debug, Deserialize)]
struct Row {
    ts: i64,
    ip: String,
    online: String,
    #[serde(default)]
    latency_ms: Option<f64>,
}

/// Load `ts,ip,online,latency_ms` rows; `ts` is unix seconds, `online` a 0/1 or true/false flag.
pub fn load_csv(path: &Path) -> Result<Vec<PingSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {} of {}", line + 1, path.display()))?;
        let ts = DateTime::from_timestamp(row.ts, 0)
            .with_context(|| format!("row {}: timestamp {} out of range", line + 1, row.ts))?;
        let online = parse_flag(&row.online)
            .with_context(|| format!("row {}: bad online flag `{}`", line + 1, row.online))?;
        let status = DeviceStatus { online, latency_ms: row.latency_ms.filter(|_| online) };
        out.push(PingSample { ts, ip: row.ip, status });
    }
    log::info!("loaded {} ping samples from {}", out.len(), path.display());
    Ok(out)
}

fn parse_flag(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "up" => Ok(true),
        "0" | "false" | "no" | "down" => Ok(false),
        other => bail!("expected 0/1/true/false, got `{other}`"),
    }
}

/// Upper bound on synthesized ticks: one day of polls.
pub const MAX_SYNTHETIC_TICKS: usize = 24 * 60 * 60 / PING_INTERVAL_SECS as usize;

/// Deterministic fleet of `devices` probed `ticks` times, one poll interval apart.
/// `ticks` is capped at [`MAX_SYNTHETIC_TICKS`].
pub fn synthesize(devices: usize, ticks: usize, start: DateTime<Utc>) -> Vec<PingSample> {
    let ticks = ticks.min(MAX_SYNTHETIC_TICKS);
    let mut out = Vec::with_capacity(devices.saturating_mul(ticks));
    for t in 0..ticks {
        let offset = chrono::Duration::seconds(PING_INTERVAL_SECS as i64 * t as i64);
        let Some(ts) = start.checked_add_signed(offset) else { break };
        for d in 0..devices {
            let online = (t + d * 7) % (11 + d) != 0;
            let latency = 5.0 + d as f64 * 3.0 + (t % 5) as f64 * 1.5;
            let status = if online { DeviceStatus::online(latency) } else { DeviceStatus::offline() };
            out.push(PingSample { ts, ip: format!("10.0.0.{}", d + 1), status });
        }
    }
    out
}

/// Group samples sharing a timestamp, oldest tick first. A repeated device within a tick keeps its last row.
pub fn group_by_tick(samples: Vec<PingSample>) -> Vec<Tick> {
    let mut ticks: BTreeMap<DateTime<Utc>, BTreeMap<String, DeviceStatus>> = BTreeMap::new();
    for s in samples {
        ticks.entry(s.ts).or_default().insert(s.ip, s.status);
    }
    ticks.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn flags() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn synthesized_ticks_group_per_interval() {
        let samples = synthesize(3, 4, start());
        assert_eq!(samples.len(), 12);
        let ticks = group_by_tick(samples);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[1].0 - ticks[0].0, chrono::Duration::seconds(3));
        assert_eq!(ticks[0].1.len(), 3);
        // Device 0 is down on tick 0 by construction.
        assert!(!ticks[0].1["10.0.0.1"].online);
    }

    #[test]
    fn synthetic_ticks_are_capped() {
        let samples = synthesize(1, usize::MAX, start());
        assert_eq!(samples.len(), MAX_SYNTHETIC_TICKS);
        let last = samples.last().unwrap().ts;
        assert_eq!(last - start(), chrono::Duration::seconds(3 * (MAX_SYNTHETIC_TICKS as i64 - 1)));
    }

    #[test]
    fn loads_sample_log() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/ping_log.csv");
        let samples = load_csv(&path).expect("sample log");
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| s.status.online || s.status.latency_ms.is_none()));
    }
}
