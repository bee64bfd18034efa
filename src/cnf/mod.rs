/// The smallest proportion which can be trimmed from either end of a sample
pub const MIN_TRIM_PROPORTION: f64 = 0.0;

/// The largest proportion which can be trimmed from either end of a sample
pub const MAX_TRIM_PROPORTION: f64 = 0.5;

/// The combined low and high proportions must stay strictly below this value
pub const MAX_TOTAL_TRIM_PROPORTION: f64 = 1.0;

/// The tracing target used for calculator events
pub const TRACE_TARGET: &str = "trimmed_mean::math";
