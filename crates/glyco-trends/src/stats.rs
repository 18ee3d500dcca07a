use glyco_core::models::SpikeEvent;

/// Running sums over one period's events, reduced in a fixed order.
#[derive(Debug, Default)]
pub(crate) struct PeriodStats {
    count: usize,
    sum_delta: f64,
    sum_magnitude: f64,
    sum_ttp_minutes: f64,
    max_delta: Option<i64>,
    min_delta: Option<i64>,
    high_spikes: usize,
    recovered: usize,
}

impl PeriodStats {
    pub(crate) fn push(&mut self, event: &SpikeEvent, high_spike_threshold: i64) {
        let delta = event.delta();
        self.count += 1;
        self.sum_delta += delta as f64;
        self.sum_magnitude += event.magnitude() as f64;
        self.sum_ttp_minutes += event.time_to_peak().num_seconds() as f64 / 60.0;
        self.max_delta = Some(self.max_delta.map_or(delta, |m| m.max(delta)));
        self.min_delta = Some(self.min_delta.map_or(delta, |m| m.min(delta)));
        if delta >= high_spike_threshold {
            self.high_spikes += 1;
        }
        if event.recovered() {
            self.recovered += 1;
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean_delta(&self) -> f64 {
        self.mean(self.sum_delta)
    }

    pub(crate) fn mean_magnitude(&self) -> f64 {
        self.mean(self.sum_magnitude)
    }

    pub(crate) fn mean_time_to_peak_minutes(&self) -> f64 {
        self.mean(self.sum_ttp_minutes)
    }

    pub(crate) fn max_delta(&self) -> i64 {
        self.max_delta.unwrap_or(0)
    }

    pub(crate) fn min_delta(&self) -> i64 {
        self.min_delta.unwrap_or(0)
    }

    pub(crate) fn high_spikes(&self) -> usize {
        self.high_spikes
    }

    pub(crate) fn recovered(&self) -> usize {
        self.recovered
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            sum / self.count as f64
        }
    }
}

/// Median of the signed deltas, 0.0 for no events.
pub(crate) fn median_delta(events: &[&SpikeEvent]) -> f64 {
    let mut deltas: Vec<i64> = events.iter().map(|e| e.delta()).collect();
    deltas.sort_unstable();
    let mid = deltas.len() / 2;
    match deltas.len() {
        0 => 0.0,
        n if n % 2 == 1 => deltas[mid] as f64,
        _ => (deltas[mid - 1] + deltas[mid]) as f64 / 2.0,
    }
}

/// Population standard deviation around a known mean.
pub(crate) fn population_std(events: &[&SpikeEvent], mean: f64) -> f64 {
    if events.is_empty() {
        return 0.0;
    }
    let var = events
        .iter()
        .map(|e| {
            let d = e.delta() as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / events.len() as f64;
    var.sqrt()
}
