//! Variable Layout - Centralized Input Definition
//!
//! **This file controls the scoring inputs**
//!
//! ## Rules:
//! 1. `VARIABLE_LAYOUT` and `WEIGHTED_VARIABLES` list the same names in the same order
//! 2. Weights are calibration constants, never derived from data
//! 3. Changing a range or weight changes every stored score: bump `INCIDENT_SCHEMA_VERSION`

use serde::Serialize;

use super::RegistryError;

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// A recognized input variable and its valid range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableDescriptor {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl VariableDescriptor {
    /// Clip into `[min, max]` and map to `[0, 1]`.
    /// A degenerate range (`min == max`) always yields 0.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        let clipped = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        (clipped - self.min) / (self.max - self.min)
    }

    /// Starting position for input forms: `trunc((min + max) / 4)`
    pub fn form_default(&self) -> f64 {
        ((self.min + self.max) / 4.0).trunc()
    }
}

/// A descriptor name paired with its fixed weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedVariable {
    pub name: &'static str,
    pub weight: f64,
}

// ============================================================================
// LAYOUT (Authoritative source)
// ============================================================================

pub const VELOCIDAD_MEDIA: &str = "velocidad_media";
pub const INTENSIDAD_LLUVIA: &str = "intensidad_lluvia";
pub const NIVEL_INUNDACION_CM: &str = "nivel_inundacion_cm";
pub const DENSIDAD_TRAFICO: &str = "densidad_trafico";
pub const TEMPERATURA: &str = "temperatura";

/// Ranges used for normalization
pub static VARIABLE_LAYOUT: [VariableDescriptor; 5] = [
    VariableDescriptor { name: VELOCIDAD_MEDIA, min: 0.0, max: 150.0 },     // km/h
    VariableDescriptor { name: INTENSIDAD_LLUVIA, min: 0.0, max: 200.0 },   // mm/h
    VariableDescriptor { name: NIVEL_INUNDACION_CM, min: 0.0, max: 500.0 }, // cm
    VariableDescriptor { name: DENSIDAD_TRAFICO, min: 0.0, max: 100.0 },    // %
    VariableDescriptor { name: TEMPERATURA, min: -20.0, max: 50.0 },        // °C
];

/// Weights in scoring order (wind, rain and flood dominate)
pub static WEIGHTED_VARIABLES: [WeightedVariable; 5] = [
    WeightedVariable { name: VELOCIDAD_MEDIA, weight: 1.0 },
    WeightedVariable { name: INTENSIDAD_LLUVIA, weight: 0.9 },
    WeightedVariable { name: NIVEL_INUNDACION_CM, weight: 1.1 },
    WeightedVariable { name: DENSIDAD_TRAFICO, weight: 0.4 },
    WeightedVariable { name: TEMPERATURA, weight: 0.1 },
];

/// Total number of variables
/// IMPORTANT: Must match VARIABLE_LAYOUT.len()!
pub const VARIABLE_COUNT: usize = 5;

// ============================================================================
// LOOKUP
// ============================================================================

/// Look up a descriptor by name
pub fn describe(name: &str) -> Result<&'static VariableDescriptor, RegistryError> {
    VARIABLE_LAYOUT
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| RegistryError::UnknownVariable(name.to_string()))
}

/// Full registry, in layout order
pub fn all() -> &'static [VariableDescriptor] {
    &VARIABLE_LAYOUT
}

/// Weight table, in scoring order
pub fn weighted_variables() -> &'static [WeightedVariable] {
    &WEIGHTED_VARIABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_count() {
        assert_eq!(VARIABLE_LAYOUT.len(), VARIABLE_COUNT);
        assert_eq!(WEIGHTED_VARIABLES.len(), VARIABLE_COUNT);
    }

    #[test]
    fn test_weight_table_matches_layout() {
        for (desc, weighted) in VARIABLE_LAYOUT.iter().zip(WEIGHTED_VARIABLES.iter()) {
            assert_eq!(desc.name, weighted.name);
            assert!(desc.min <= desc.max);
            assert!(weighted.weight >= 0.0);
        }
    }

    #[test]
    fn test_describe_known() {
        let temp = describe("temperatura").unwrap();
        assert_eq!(temp.min, -20.0);
        assert_eq!(temp.max, 50.0);
    }

    #[test]
    fn test_describe_unknown() {
        match describe("humedad") {
            Err(RegistryError::UnknownVariable(name)) => assert_eq!(name, "humedad"),
            other => panic!("Expected UnknownVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_clips() {
        let wind = describe(VELOCIDAD_MEDIA).unwrap();
        assert_eq!(wind.normalize(-10.0), 0.0);
        assert_eq!(wind.normalize(75.0), 0.5);
        assert_eq!(wind.normalize(400.0), 1.0);
        assert_eq!(wind.normalize(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        let fixed = VariableDescriptor { name: "fixed", min: 3.0, max: 3.0 };
        assert_eq!(fixed.normalize(3.0), 0.0);
        assert_eq!(fixed.normalize(100.0), 0.0);
    }

    #[test]
    fn test_form_defaults() {
        let defaults: Vec<f64> = VARIABLE_LAYOUT.iter().map(|v| v.form_default()).collect();
        assert_eq!(defaults, vec![37.0, 50.0, 125.0, 25.0, 7.0]);
    }
}
