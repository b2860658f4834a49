//! Protocol Types
//!
//! Labels, evaluation result and the externally supplied protocol book.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// LABELS
// ============================================================================

/// Emergency protocol that can be active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolLabel {
    #[serde(rename = "RENACIMIENTO")]
    Renacimiento,
    #[serde(rename = "CÓDIGO ROJO")]
    CodigoRojo,
    #[serde(rename = "VÍSPERA")]
    Vispera,
}

impl ProtocolLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolLabel::Renacimiento => "RENACIMIENTO",
            ProtocolLabel::CodigoRojo => "CÓDIGO ROJO",
            ProtocolLabel::Vispera => "VÍSPERA",
        }
    }
}

impl std::fmt::Display for ProtocolLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Secondary qualifier on an active protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "THANOS")]
    Thanos,
    #[serde(rename = "TITÁN")]
    Titan,
    #[serde(rename = "CELESTIALES")]
    Celestiales,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Thanos => "THANOS",
            Variant::Titan => "TITÁN",
            Variant::Celestiales => "CELESTIALES",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EVALUATION RESULT
// ============================================================================

/// Outcome of the rule evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtocolStatus {
    pub protocol: Option<ProtocolLabel>,
    pub variant: Option<Variant>,
}

impl ProtocolStatus {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn active(protocol: ProtocolLabel, variant: Option<Variant>) -> Self {
        Self {
            protocol: Some(protocol),
            variant,
        }
    }

    pub fn is_active(&self) -> bool {
        self.protocol.is_some()
    }

    /// Operator banner text
    pub fn headline(&self) -> String {
        match (self.protocol, self.variant) {
            (Some(p), Some(v)) => format!("PROTOCOLO ACTIVO: {}: {}", p, v),
            (Some(p), None) => format!("PROTOCOLO ACTIVO: {}", p),
            (None, _) => "Ningún protocolo activo".to_string(),
        }
    }
}

// ============================================================================
// PROTOCOL BOOK (protocols.json)
// ============================================================================

/// Descriptive data for one protocol
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProtocolDefinition {
    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(default)]
    pub trigger: String,

    #[serde(rename = "responsables", default)]
    pub responsible_parties: Vec<String>,

    /// Ordered action sequence
    #[serde(default)]
    pub steps: Vec<String>,
}

/// All protocols keyed by name. Read-only input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolBook {
    pub protocols: BTreeMap<String, ProtocolDefinition>,
}

impl ProtocolBook {
    pub fn get(&self, name: &str) -> Option<&ProtocolDefinition> {
        self.protocols.get(name)
    }

    /// Definition of the protocol a status points at
    pub fn for_status(&self, status: &ProtocolStatus) -> Option<&ProtocolDefinition> {
        status.protocol.and_then(|p| self.get(p.as_str()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.protocols.keys().map(|k| k.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
