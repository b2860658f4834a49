//! Risk Labels
//!
//! Two classifiers share the label set but NOT the thresholds:
//! - `incident_label`: stored with every incident
//! - `display_label`: shown to the operator next to the score

use serde::{Deserialize, Serialize};

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "BAJO")]
    Bajo,
    #[serde(rename = "MEDIO")]
    Medio,
    #[serde(rename = "ALTO")]
    Alto,
    #[serde(rename = "CRÍTICO")]
    Critico,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Bajo => "BAJO",
            RiskLabel::Medio => "MEDIO",
            RiskLabel::Alto => "ALTO",
            RiskLabel::Critico => "CRÍTICO",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLabel::Bajo => "green",
            RiskLabel::Medio => "yellow",
            RiskLabel::Alto => "orange",
            RiskLabel::Critico => "red",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLabel::Bajo => 1,
            RiskLabel::Medio => 2,
            RiskLabel::Alto => 3,
            RiskLabel::Critico => 4,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// THRESHOLDS (upper bounds, inclusive)
// ============================================================================

pub const INCIDENT_BAJO_MAX: f64 = 0.50;
pub const INCIDENT_MEDIO_MAX: f64 = 0.70;
pub const INCIDENT_ALTO_MAX: f64 = 0.80;

pub const DISPLAY_BAJO_MAX: f64 = 0.59;
pub const DISPLAY_MEDIO_MAX: f64 = 0.74;
pub const DISPLAY_ALTO_MAX: f64 = 0.89;

/// Label stored on incidents
pub fn incident_label(score: f64) -> RiskLabel {
    if score <= INCIDENT_BAJO_MAX {
        RiskLabel::Bajo
    } else if score <= INCIDENT_MEDIO_MAX {
        RiskLabel::Medio
    } else if score <= INCIDENT_ALTO_MAX {
        RiskLabel::Alto
    } else {
        RiskLabel::Critico
    }
}

/// Label and color shown next to a live score
pub fn display_label(score: f64) -> (RiskLabel, &'static str) {
    let label = if score <= DISPLAY_BAJO_MAX {
        RiskLabel::Bajo
    } else if score <= DISPLAY_MEDIO_MAX {
        RiskLabel::Medio
    } else if score <= DISPLAY_ALTO_MAX {
        RiskLabel::Alto
    } else {
        RiskLabel::Critico
    };
    (label, label.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_thresholds() {
        assert_eq!(incident_label(0.0), RiskLabel::Bajo);
        assert_eq!(incident_label(0.50), RiskLabel::Bajo);
        assert_eq!(incident_label(0.5001), RiskLabel::Medio);
        assert_eq!(incident_label(0.70), RiskLabel::Medio);
        assert_eq!(incident_label(0.80), RiskLabel::Alto);
        assert_eq!(incident_label(0.8001), RiskLabel::Critico);
    }

    #[test]
    fn test_display_thresholds() {
        assert_eq!(display_label(0.59), (RiskLabel::Bajo, "green"));
        assert_eq!(display_label(0.60), (RiskLabel::Medio, "yellow"));
        assert_eq!(display_label(0.74), (RiskLabel::Medio, "yellow"));
        assert_eq!(display_label(0.89), (RiskLabel::Alto, "orange"));
        assert_eq!(display_label(0.95), (RiskLabel::Critico, "red"));
    }

    #[test]
    fn test_classifiers_disagree_in_between() {
        // 0.55 is MEDIO for incidents but still BAJO on screen
        assert_eq!(incident_label(0.55), RiskLabel::Medio);
        assert_eq!(display_label(0.55).0, RiskLabel::Bajo);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&RiskLabel::Critico).unwrap(), "\"CRÍTICO\"");
        let parsed: RiskLabel = serde_json::from_str("\"MEDIO\"").unwrap();
        assert_eq!(parsed, RiskLabel::Medio);
    }
}
