use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use glyco_core::config::TrendsConfig;
use glyco_core::models::{Granularity, SpikeEvent, TrendSummary};

use crate::period::period_bounds;
use crate::stats::{median_delta, population_std, PeriodStats};

/// Reduces spike events to per-period summaries.
#[derive(Debug, Clone, Default)]
pub struct TrendAggregator {
    config: TrendsConfig,
}

impl TrendAggregator {
    pub fn new(config: TrendsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrendsConfig {
        &self.config
    }

    /// One summary per non-empty period, ordered by period start.
    ///
    /// Input order does not matter: each period's events are sorted by meal
    /// timestamp, meal id, then reading sequence before any sums are taken.
    pub fn aggregate(&self, events: &[SpikeEvent], granularity: Granularity) -> Vec<TrendSummary> {
        let mut periods: BTreeMap<(DateTime<Utc>, DateTime<Utc>), Vec<&SpikeEvent>> = BTreeMap::new();
        for event in events {
            periods
                .entry(period_bounds(event.timestamp(), granularity))
                .or_default()
                .push(event);
        }

        let summaries: Vec<TrendSummary> = periods
            .into_iter()
            .map(|((start, end), mut bucket)| {
                bucket.sort_by(|a, b| {
                    (a.timestamp(), a.meal().id(), a.before().seq, a.after().seq).cmp(&(
                        b.timestamp(),
                        b.meal().id(),
                        b.before().seq,
                        b.after().seq,
                    ))
                });
                self.summarize(start, end, granularity, &bucket)
            })
            .collect();

        tracing::info!(
            granularity = %granularity,
            events = events.len(),
            periods = summaries.len(),
            "aggregation finished"
        );
        summaries
    }

    /// Aggregate with the configured default granularity.
    pub fn aggregate_default(&self, events: &[SpikeEvent]) -> Vec<TrendSummary> {
        self.aggregate(events, self.config.default_granularity)
    }

    fn summarize(
        &self,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        granularity: Granularity,
        events: &[&SpikeEvent],
    ) -> TrendSummary {
        let mut stats = PeriodStats::default();
        for event in events {
            stats.push(event, self.config.high_spike_threshold);
        }
        let mean_delta = stats.mean_delta();

        TrendSummary {
            period_start,
            period_end,
            granularity,
            mean_delta,
            median_delta: median_delta(events),
            max_delta: stats.max_delta(),
            min_delta: stats.min_delta(),
            mean_magnitude: stats.mean_magnitude(),
            std_delta: population_std(events, mean_delta),
            high_spike_count: stats.high_spikes(),
            recovered_count: stats.recovered(),
            mean_time_to_peak_minutes: stats.mean_time_to_peak_minutes(),
            sample_count: stats.count(),
        }
    }
}
