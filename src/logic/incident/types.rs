use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::INCIDENT_SCHEMA_VERSION;
use crate::logic::precog::{RiskLabel, ScoreResult};
use crate::logic::variables::RawInputs;

/// One persisted scoring invocation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Incident {
    /// Records written before versioning carry no field and load as v1
    #[serde(default = "legacy_schema_version")]
    pub schema_version: u8,

    pub id: String,

    /// Local time, `YYYY-MM-DDTHH:MM:SS`
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: String,

    pub score: f64,
    pub pct: u8,
    pub label: RiskLabel,

    /// Inputs as supplied (unclipped). Non-finite values persist as null.
    #[serde(deserialize_with = "deserialize_vars")]
    pub vars: RawInputs,

    /// Not populated yet
    #[serde(default)]
    pub protocol_activated: Option<String>,

    /// Not populated yet
    #[serde(default)]
    pub actions: Vec<String>,
}

fn legacy_schema_version() -> u8 {
    1
}

fn deserialize_vars<'de, D>(deserializer: D) -> Result<RawInputs, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<f64>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or(f64::NAN)))
        .collect())
}

impl Incident {
    pub fn is_current_schema(&self) -> bool {
        self.schema_version == INCIDENT_SCHEMA_VERSION
    }

    /// One-line summary for event feeds
    pub fn feed_line(&self) -> String {
        let vars = self
            .vars
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} — {} — {} — {{{}}}", self.timestamp, self.label, self.id, vars)
    }
}

/// Output of one simulation: the live score plus the stored incident
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRecord {
    pub score_result: ScoreResult,
    pub incident: Incident,
}
