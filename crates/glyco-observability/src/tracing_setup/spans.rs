//! Span definitions per pipeline stage.

/// Span around one full analysis run.
#[macro_export]
macro_rules! analysis_span {
    ($snapshot_version:expr, $granularity:expr) => {
        tracing::info_span!(
            "glyco.analysis",
            snapshot_version = $snapshot_version,
            granularity = %$granularity
        )
    };
}

/// Span around spike pairing.
#[macro_export]
macro_rules! pairing_span {
    ($meal_count:expr) => {
        tracing::info_span!("glyco.pairing", meal_count = $meal_count)
    };
}

/// Span around trend aggregation.
#[macro_export]
macro_rules! aggregation_span {
    ($event_count:expr) => {
        tracing::info_span!("glyco.aggregation", event_count = $event_count)
    };
}

/// Span around risk scoring.
#[macro_export]
macro_rules! scoring_span {
    ($period_count:expr, $has_profile:expr) => {
        tracing::info_span!(
            "glyco.scoring",
            period_count = $period_count,
            genetic_profile = $has_profile
        )
    };
}
