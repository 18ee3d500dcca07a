//! Structured log events for each pipeline stage.
//!
//! Every helper sets a fixed `event` field so log consumers can filter on it.

/// A batch passed validation and was committed to the store.
pub fn batch_ingested(meals: usize, readings: usize, has_genetic_profile: bool) {
    tracing::info!(
        event = "batch_ingested",
        meals = meals,
        readings = readings,
        genetic_profile = has_genetic_profile,
        "batch ingested"
    );
}

/// A batch was rejected; nothing from it was kept.
pub fn batch_rejected(error: &str) {
    tracing::warn!(event = "batch_rejected", error = %error, "batch rejected");
}

pub fn pairing_completed(paired: usize, skipped_no_before: usize, skipped_no_after: usize) {
    tracing::info!(
        event = "pairing_completed",
        paired = paired,
        skipped_no_before = skipped_no_before,
        skipped_no_after = skipped_no_after,
        "pairing completed"
    );
}

pub fn aggregation_completed(granularity: &str, events: usize, periods: usize) {
    tracing::info!(
        event = "aggregation_completed",
        granularity = %granularity,
        events = events,
        periods = periods,
        "aggregation completed"
    );
}

/// Risk scoring finished. `max_tier` is `None` when there was nothing to score.
pub fn assessment_completed(periods: usize, meals: usize, max_tier: Option<&str>) {
    tracing::info!(
        event = "assessment_completed",
        periods = periods,
        meals = meals,
        max_tier = ?max_tier,
        "assessment completed"
    );
}

pub fn recommendations_emitted(avoid: usize, prefer: usize, guidance: usize) {
    tracing::info!(
        event = "recommendations_emitted",
        avoid = avoid,
        prefer = prefer,
        guidance = guidance,
        "recommendations emitted"
    );
}

pub fn report_generated(snapshot_version: u64, events: usize, genetic_profile_used: bool) {
    tracing::info!(
        event = "report_generated",
        snapshot_version = snapshot_version,
        events = events,
        genetic_profile_used = genetic_profile_used,
        "report generated"
    );
}
