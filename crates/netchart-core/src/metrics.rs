// File: crates/netchart-core/src/metrics.rs
// Summary: Rolling per-device ping history, uptime summaries, fleet availability, and the
//          per-tick metrics timeline exposed as plain series vectors and labels.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between polls of the device fleet.
pub const PING_INTERVAL_SECS: u32 = 3;
/// How far back per-device history reaches.
pub const HISTORY_WINDOW_MINUTES: u32 = 60;

/// Latest probe result for one device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub online: bool,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

impl DeviceStatus {
    pub fn online(latency_ms: f64) -> Self {
        Self { online: true, latency_ms: Some(latency_ms) }
    }
    pub fn offline() -> Self {
        Self { online: false, latency_ms: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PingRecord {
    pub ts: DateTime<Utc>,
    pub online: bool,
    pub latency_ms: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryConfig {
    pub window: Duration,
    pub max_samples: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        let window_secs = HISTORY_WINDOW_MINUTES * 60;
        Self {
            window: Duration::seconds(window_secs as i64),
            max_samples: (window_secs / PING_INTERVAL_SECS) as usize,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UptimeSummary {
    /// Percentage online, one decimal.
    pub uptime: f64,
    pub samples: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorstDevice {
    pub ip: String,
    pub uptime: f64,
}

/// Per-device rolling window of probe results, bounded by sample count and age.
#[derive(Clone, Debug, Default)]
pub struct PingHistory {
    config: HistoryConfig,
    devices: BTreeMap<String, VecDeque<PingRecord>>,
}

impl PingHistory {
    pub fn new(config: HistoryConfig) -> Self {
        Self { config, devices: BTreeMap::new() }
    }

    /// Append one poll's statuses at `now`, then evict records older than the window.
    pub fn record<'a, I>(&mut self, now: DateTime<Utc>, statuses: I)
    where
        I: IntoIterator<Item = (&'a str, DeviceStatus)>,
    {
        let cap = self.config.max_samples.max(1);
        for (ip, status) in statuses {
            let records = self.devices.entry(ip.to_string()).or_default();
            records.push_back(PingRecord { ts: now, online: status.online, latency_ms: status.latency_ms });
            while records.len() > cap {
                records.pop_front();
            }
        }

        let cutoff = now - self.config.window;
        let mut evicted = 0usize;
        for records in self.devices.values_mut() {
            while records.front().is_some_and(|r| r.ts < cutoff) {
                records.pop_front();
                evicted += 1;
            }
        }
        self.devices.retain(|_, r| !r.is_empty());
        if evicted > 0 {
            log::debug!("evicted {evicted} ping records older than {cutoff}");
        }
    }

    pub fn devices(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn records(&self, ip: &str) -> Option<&VecDeque<PingRecord>> {
        self.devices.get(ip)
    }

    /// Uptime per device with at least one sample.
    pub fn summary(&self) -> BTreeMap<String, UptimeSummary> {
        self.devices
            .iter()
            .filter_map(|(ip, records)| {
                uptime_pct(records).map(|u| (ip.clone(), UptimeSummary { uptime: round1(u), samples: records.len() }))
            })
            .collect()
    }

    /// Device with the lowest one-decimal uptime; the first in address order wins ties.
    pub fn worst_device(&self) -> Option<WorstDevice> {
        let mut worst: Option<(&str, f64)> = None;
        for (ip, records) in &self.devices {
            let Some(u) = uptime_pct(records).map(round1) else { continue };
            if worst.map_or(true, |(_, w)| u < w) {
                worst = Some((ip, u));
            }
        }
        worst.map(|(ip, uptime)| WorstDevice { ip: ip.to_string(), uptime })
    }
}

fn uptime_pct(records: &VecDeque<PingRecord>) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let online = records.iter().filter(|r| r.online).count();
    Some(online as f64 / records.len() as f64 * 100.0)
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Whole-percent share of online devices; 0 for an empty fleet.
pub fn availability_percent<I: IntoIterator<Item = bool>>(online: I) -> u8 {
    let (mut total, mut up) = (0usize, 0usize);
    for o in online {
        total += 1;
        up += o as usize;
    }
    if total == 0 {
        return 0;
    }
    (up as f64 / total as f64 * 100.0).round() as u8
}

/// Dashboard coloring bucket for an availability percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HealthBand {
    Critical,
    Degraded,
    Healthy,
}

impl HealthBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 50.0 {
            Self::Critical
        } else if percent < 80.0 {
            Self::Degraded
        } else {
            Self::Healthy
        }
    }
}

/// Fleet metrics for one poll tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelinePoint {
    pub ts: DateTime<Utc>,
    pub availability: Option<f64>,
    pub packet_loss: Option<f64>,
    /// Mean latency over devices that answered.
    pub latency_ms: Option<f64>,
}

impl TimelinePoint {
    pub fn from_statuses<'a, I>(ts: DateTime<Utc>, statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a DeviceStatus>,
    {
        let (mut total, mut up) = (0usize, 0usize);
        let (mut lat_sum, mut lat_n) = (0.0f64, 0usize);
        for s in statuses {
            total += 1;
            if s.online {
                up += 1;
                if let Some(l) = s.latency_ms.filter(|l| l.is_finite()) {
                    lat_sum += l;
                    lat_n += 1;
                }
            }
        }
        let availability = (total > 0).then(|| up as f64 / total as f64 * 100.0);
        Self {
            ts,
            availability,
            packet_loss: availability.map(|a| 100.0 - a),
            latency_ms: (lat_n > 0).then(|| lat_sum / lat_n as f64),
        }
    }
}

/// Most recent `window` ticks of fleet metrics, ready to hand to a chart.
#[derive(Clone, Debug)]
pub struct MetricsTimeline {
    window: usize,
    points: VecDeque<TimelinePoint>,
}

impl MetricsTimeline {
    pub fn new(window: usize) -> Self {
        Self { window: window.max(1), points: VecDeque::new() }
    }

    pub fn push(&mut self, point: TimelinePoint) {
        self.points.push_back(point);
        while self.points.len() > self.window {
            self.points.pop_front();
        }
    }

    pub fn push_tick<'a, I>(&mut self, ts: DateTime<Utc>, statuses: I)
    where
        I: IntoIterator<Item = &'a DeviceStatus>,
    {
        self.push(TimelinePoint::from_statuses(ts, statuses));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tick times as `HH:MM:SS` (UTC).
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.ts.format("%H:%M:%S").to_string()).collect()
    }

    pub fn availability(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.availability).collect()
    }

    pub fn packet_loss(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.packet_loss).collect()
    }

    pub fn latency(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.latency_ms).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn default_config_matches_poll_rate() {
        let c = HistoryConfig::default();
        assert_eq!(c.max_samples, 1200);
        assert_eq!(c.window, Duration::minutes(60));
    }

    #[test]
    fn summary_rounds_to_one_decimal() {
        let mut h = PingHistory::default();
        h.record(at(0), [("10.0.0.1", DeviceStatus::online(1.0))]);
        h.record(at(5), [("10.0.0.1", DeviceStatus::offline())]);
        h.record(at(10), [("10.0.0.1", DeviceStatus::online(2.0))]);
        let s = h.summary();
        assert_eq!(s["10.0.0.1"], UptimeSummary { uptime: 66.7, samples: 3 });
    }

    #[test]
    fn count_cap_evicts_oldest() {
        let mut h = PingHistory::new(HistoryConfig { window: Duration::hours(1), max_samples: 2 });
        h.record(at(0), [("a", DeviceStatus::offline())]);
        h.record(at(1), [("a", DeviceStatus::online(1.0))]);
        h.record(at(2), [("a", DeviceStatus::online(1.0))]);
        assert_eq!(h.records("a").unwrap().len(), 2);
        assert_eq!(h.summary()["a"].uptime, 100.0);
    }

    #[test]
    fn age_cutoff_evicts_and_drops_empty_devices() {
        let mut h = PingHistory::new(HistoryConfig { window: Duration::seconds(10), max_samples: 100 });
        h.record(at(0), [("a", DeviceStatus::offline()), ("b", DeviceStatus::offline())]);
        h.record(at(20), [("a", DeviceStatus::online(1.0))]);
        assert_eq!(h.records("a").unwrap().len(), 1);
        assert!(h.records("b").is_none());
        assert_eq!(h.devices().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn worst_device_lowest_uptime() {
        let mut h = PingHistory::default();
        assert_eq!(h.worst_device(), None);
        h.record(at(0), [("a", DeviceStatus::online(1.0)), ("b", DeviceStatus::offline())]);
        h.record(at(3), [("a", DeviceStatus::online(1.0)), ("b", DeviceStatus::online(1.0))]);
        assert_eq!(h.worst_device(), Some(WorstDevice { ip: "b".into(), uptime: 50.0 }));
    }

    #[test]
    fn worst_device_ties_on_rounded_uptime() {
        let mut h = PingHistory::new(HistoryConfig { window: Duration::hours(1), max_samples: 2000 });
        for i in 0..1000 {
            let a = if i == 0 { DeviceStatus::offline() } else { DeviceStatus::online(1.0) };
            h.record(at(i), [("a", a)]);
            if i >= 1 {
                let b = if i == 1 { DeviceStatus::offline() } else { DeviceStatus::online(1.0) };
                h.record(at(i), [("b", b)]);
            }
        }
        // a = 999/1000, b = 998/999: both 99.9 after rounding, so address order decides.
        assert_eq!(h.summary()["a"].uptime, h.summary()["b"].uptime);
        assert_eq!(h.worst_device(), Some(WorstDevice { ip: "a".into(), uptime: 99.9 }));
    }

    #[test]
    fn availability_and_bands() {
        assert_eq!(availability_percent([]), 0);
        assert_eq!(availability_percent([true, false, true]), 67);
        assert_eq!(HealthBand::from_percent(49.0), HealthBand::Critical);
        assert_eq!(HealthBand::from_percent(50.0), HealthBand::Degraded);
        assert_eq!(HealthBand::from_percent(80.0), HealthBand::Healthy);
    }

    #[test]
    fn timeline_point_metrics() {
        let statuses = [DeviceStatus::online(10.0), DeviceStatus::online(30.0), DeviceStatus::offline(), DeviceStatus::offline()];
        let p = TimelinePoint::from_statuses(at(0), &statuses);
        assert_eq!(p.availability, Some(50.0));
        assert_eq!(p.packet_loss, Some(50.0));
        assert_eq!(p.latency_ms, Some(20.0));

        let down = TimelinePoint::from_statuses(at(0), &[DeviceStatus::offline()]);
        assert_eq!(down.latency_ms, None);
        let empty = TimelinePoint::from_statuses(at(0), &[]);
        assert_eq!(empty.availability, None);
    }

    #[test]
    fn timeline_window_and_labels() {
        let mut t = MetricsTimeline::new(2);
        for i in 0..3 {
            t.push_tick(at(i * 3), &[DeviceStatus::online(1.0)]);
        }
        assert_eq!(t.len(), 2);
        // 1_700_000_000 is 22:13:20 UTC
        assert_eq!(t.labels(), ["22:13:23", "22:13:26"]);
    }
}
