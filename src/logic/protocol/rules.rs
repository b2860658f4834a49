//! Protocol Trigger Thresholds
//!
//! Constants only. Evaluation order lives in `evaluator`.

/// Rule 1: wind at or above (km/h)
pub const THANOS_WIND_MIN: f64 = 110.0;

/// Rule 1: flood level at or above (cm)
pub const THANOS_FLOOD_MIN: f64 = 150.0;

/// Rule 2: wind at or above (km/h)
pub const TITAN_WIND_MIN: f64 = 95.0;

/// Rule 3: wind at or above (km/h).
/// Zero makes the rule match any non-negative wind.
pub const CELESTIALES_WIND_MIN: f64 = 0.0;

/// Rule 3: flood level at or above (cm)
pub const CELESTIALES_FLOOD_MIN: f64 = 20.0;

/// Rule 4: risk score at or below activates recovery
pub const RECOVERY_SCORE_MAX: f64 = 0.4;
