//! Protocol Rule Evaluator
//!
//! Fixed threshold rules, evaluated top to bottom, first match wins:
//! 1. wind >= 110 OR flood >= 150  → RENACIMIENTO / THANOS
//! 2. wind >= 95                   → CÓDIGO ROJO / TITÁN
//! 3. wind >= 0 OR flood >= 20     → VÍSPERA / CELESTIALES
//! 4. risk score <= 0.4            → RENACIMIENTO
//!
//! Rule 3 matches every non-negative wind, so rule 4 only runs for negative
//! (or NaN) wind readings. Kept as is until the product owner decides.

use super::rules::{
    CELESTIALES_FLOOD_MIN, CELESTIALES_WIND_MIN, RECOVERY_SCORE_MAX, THANOS_FLOOD_MIN,
    THANOS_WIND_MIN, TITAN_WIND_MIN,
};
use super::types::{ProtocolLabel, ProtocolStatus, Variant};
use crate::logic::precog::score;
use crate::logic::variables::{
    RawInputs, DENSIDAD_TRAFICO, INTENSIDAD_LLUVIA, NIVEL_INUNDACION_CM, TEMPERATURA,
    VELOCIDAD_MEDIA,
};

/// Select the active protocol for the current conditions
pub fn evaluate(wind: f64, flood_cm: f64, temp: f64, traffic_pct: f64) -> ProtocolStatus {
    let status = if wind >= THANOS_WIND_MIN || flood_cm >= THANOS_FLOOD_MIN {
        ProtocolStatus::active(ProtocolLabel::Renacimiento, Some(Variant::Thanos))
    } else if wind >= TITAN_WIND_MIN {
        ProtocolStatus::active(ProtocolLabel::CodigoRojo, Some(Variant::Titan))
    } else if wind >= CELESTIALES_WIND_MIN || flood_cm >= CELESTIALES_FLOOD_MIN {
        ProtocolStatus::active(ProtocolLabel::Vispera, Some(Variant::Celestiales))
    } else {
        let risk = score(&conditions_as_inputs(wind, flood_cm, temp, traffic_pct)).score;
        if risk <= RECOVERY_SCORE_MAX {
            ProtocolStatus::active(ProtocolLabel::Renacimiento, None)
        } else {
            ProtocolStatus::inactive()
        }
    };

    if status.is_active() {
        log::info!(
            "Protocol rules (wind={}, flood={}cm): {}",
            wind,
            flood_cm,
            status.headline()
        );
    }
    status
}

/// Map field conditions onto scorer inputs (no rain reading: 0)
pub fn conditions_as_inputs(wind: f64, flood_cm: f64, temp: f64, traffic_pct: f64) -> RawInputs {
    [
        (VELOCIDAD_MEDIA, wind),
        (INTENSIDAD_LLUVIA, 0.0),
        (NIVEL_INUNDACION_CM, flood_cm),
        (DENSIDAD_TRAFICO, traffic_pct),
        (TEMPERATURA, temp),
    ]
    .iter()
    .map(|(name, value)| (name.to_string(), *value))
    .collect()
}

// ============================================================================
// TESTS
// ============================================================================
