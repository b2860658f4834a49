//! Risk Scorer
//!
//! Explainable toy model:
//! 1. Normalize every input by its range (clipped, never rejected)
//! 2. Weighted sum of the normalized values
//! 3. `score = sigmoid(sum - SCORE_SHIFT)`
//!
//! Pure function - no state, no I/O.

use super::types::{Contribution, Contributions, ScoreResult};
use crate::logic::variables::{describe, weighted_variables, RawInputs};

// ============================================================================
// CALIBRATION
// ============================================================================

/// Shift applied before the sigmoid so mid-range inputs stay away from 1.
/// Must stay exactly 1.5 for stored scores to remain comparable.
pub const SCORE_SHIFT: f64 = 1.5;

/// Decimals reported for score, normalized and weighted values
const VALUE_DECIMALS: i32 = 4;

/// Decimals reported for pct_of_total
const SHARE_DECIMALS: i32 = 1;

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Score a set of raw inputs.
///
/// Missing variables count as 0, unknown keys are ignored and NaN is
/// treated as missing.
pub fn score(inputs: &RawInputs) -> ScoreResult {
    // (name, raw, normalized, weight, weighted) at full precision
    let mut rows = Vec::with_capacity(weighted_variables().len());
    let mut total = 0.0f64;

    for wv in weighted_variables() {
        let raw = inputs
            .get(wv.name)
            .copied()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0);

        let normalized = describe(wv.name)
            .map(|desc| desc.normalize(raw))
            .unwrap_or(0.0);

        let weighted = wv.weight * normalized;
        total += weighted;
        rows.push((wv.name, raw, normalized, wv.weight, weighted));
    }

    let denom = if total > 0.0 { total } else { 1.0 };

    let mut contributions = Contributions::default();
    for (name, raw, normalized, weight, weighted) in rows {
        contributions.push(
            name,
            Contribution {
                value: raw,
                normalized: round_to(normalized, VALUE_DECIMALS),
                weight,
                weighted_contribution: round_to(weighted, VALUE_DECIMALS),
                pct_of_total: round_to(100.0 * weighted / denom, SHARE_DECIMALS),
            },
        );
    }

    let score = round_to(sigmoid(total - SCORE_SHIFT), VALUE_DECIMALS);

    ScoreResult {
        score,
        pct: to_pct(score),
        contributions,
    }
}

/// Logistic function
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Percentage of a [0, 1] score, rounded half away from zero
pub fn to_pct(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// TESTS
// ============================================================================
