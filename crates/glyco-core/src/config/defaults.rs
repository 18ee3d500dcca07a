// Single source of truth for all default values.

use crate::models::Granularity;

// --- Store ---
pub const DEFAULT_REJECT_DUPLICATE_READINGS: bool = true;

// --- Pairing ---
pub const DEFAULT_WINDOW_BEFORE_MINUTES: i64 = 120; // 2h
pub const DEFAULT_WINDOW_AFTER_MINUTES: i64 = 180; // 3h
pub const DEFAULT_RECOVERY_TOLERANCE: f64 = 0.10;
pub const MAX_WINDOW_MINUTES: i64 = 7 * 24 * 60; // 1 week

// --- Trends ---
pub const DEFAULT_HIGH_SPIKE_THRESHOLD: i64 = 40; // mg/dL
pub const DEFAULT_GRANULARITY: Granularity = Granularity::Day;

// --- Risk ---
pub const DEFAULT_SPIKE_WEIGHT: f64 = 0.5;
pub const DEFAULT_HIGH_SPIKE_RATIO_WEIGHT: f64 = 0.3;
pub const DEFAULT_GENETIC_WEIGHT: f64 = 0.2;
pub const DEFAULT_MEAN_DELTA_CEILING: f64 = 100.0; // mg/dL
pub const DEFAULT_TIER_MODERATE: f64 = 0.25;
pub const DEFAULT_TIER_HIGH: f64 = 0.5;
pub const DEFAULT_TIER_SEVERE: f64 = 0.75;

// --- Lifestyle ---
pub const DEFAULT_SEDENTARY_MULTIPLIER: f64 = 1.2;
pub const DEFAULT_LIGHT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_MODERATE_MULTIPLIER: f64 = 0.8;
pub const DEFAULT_ACTIVE_MULTIPLIER: f64 = 0.6;

// --- Recommendation ---
pub const DEFAULT_BUCKET_GRAMS: u32 = 10;
pub const DEFAULT_MIN_BUCKET_SAMPLES: usize = 2;
pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_GENETIC_ADVICE_THRESHOLD: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
