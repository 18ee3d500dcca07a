//! Period trend summaries, one per non-empty aggregation window.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar period size used for aggregation. All periods are UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Some(Granularity::Day),
            "week" | "weekly" => Some(Granularity::Week),
            "month" | "monthly" => Some(Granularity::Month),
            _ => None,
        }
    }

    pub fn all() -> [Granularity; 3] {
        [Granularity::Day, Granularity::Week, Granularity::Month]
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spike statistics for one period. Recomputed from events, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Inclusive start of the period.
    pub period_start: DateTime<Utc>,
    /// Exclusive end of the period.
    pub period_end: DateTime<Utc>,
    pub granularity: Granularity,
    /// Mean signed delta (mg/dL).
    pub mean_delta: f64,
    /// Median signed delta. The mean of the middle pair for even counts.
    pub median_delta: f64,
    /// Largest signed delta.
    pub max_delta: i64,
    /// Smallest signed delta.
    pub min_delta: i64,
    /// Mean of |delta|. Drops count as much as rises here.
    pub mean_magnitude: f64,
    /// Population standard deviation of the signed deltas.
    pub std_delta: f64,
    /// Events whose delta reached the high-spike threshold.
    pub high_spike_count: usize,
    /// Events that returned near their before-value within the window.
    pub recovered_count: usize,
    /// Mean minutes from meal to the paired after reading.
    pub mean_time_to_peak_minutes: f64,
    /// Number of events in the period. Always at least 1.
    pub sample_count: usize,
}

impl TrendSummary {
    /// Share of events that were high spikes, in [0, 1].
    pub fn high_spike_ratio(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.high_spike_count as f64 / self.sample_count as f64
    }

    /// Share of events that recovered, in [0, 1].
    pub fn recovery_rate(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.recovered_count as f64 / self.sample_count as f64
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.period_start <= timestamp && timestamp < self.period_end
    }
}
