//! Variables Module
//!
//! Static registry of the scoring inputs and their valid ranges.
//!
//! ## Structure
//! - `layout`: Descriptors, weights, lookup

pub mod layout;

use std::collections::BTreeMap;

pub use layout::{
    all, describe, weighted_variables, VariableDescriptor, WeightedVariable,
    DENSIDAD_TRAFICO, INTENSIDAD_LLUVIA, NIVEL_INUNDACION_CM, TEMPERATURA, VARIABLE_COUNT,
    VELOCIDAD_MEDIA,
};

/// Raw caller inputs keyed by variable name
pub type RawInputs = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
}

/// Form defaults for every variable
pub fn default_inputs() -> RawInputs {
    all()
        .iter()
        .map(|v| (v.name.to_string(), v.form_default()))
        .collect()
}

/// Build inputs from `(name, value)` pairs, rejecting unknown names
pub fn inputs_from_pairs<'a, I>(pairs: I) -> Result<RawInputs, RegistryError>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut inputs = RawInputs::new();
    for (name, value) in pairs {
        describe(name)?;
        inputs.insert(name.to_string(), value);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_cover_registry() {
        let inputs = default_inputs();
        assert_eq!(inputs.len(), VARIABLE_COUNT);
        assert_eq!(inputs[TEMPERATURA], 7.0);
        assert_eq!(inputs[NIVEL_INUNDACION_CM], 125.0);
    }

    #[test]
    fn test_inputs_from_pairs() {
        let inputs = inputs_from_pairs([(VELOCIDAD_MEDIA, 80.0), (TEMPERATURA, -5.0)]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[VELOCIDAD_MEDIA], 80.0);

        let err = inputs_from_pairs([("viento", 80.0)]).unwrap_err();
        assert_eq!(err, RegistryError::UnknownVariable("viento".to_string()));
        assert_eq!(err.to_string(), "Unknown variable: viento");
    }
}
