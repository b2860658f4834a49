//! Incident Recorder
//!
//! Scores the inputs, wraps the result into an Incident and prepends it to
//! the incident log. The log is capped; oldest entries drop silently.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use super::types::{Incident, SimulationRecord};
use crate::constants::{
    DEFAULT_INCIDENT_LIMIT, INCIDENTS_FILE, INCIDENT_ID_LEN, INCIDENT_SCHEMA_VERSION,
    TIMESTAMP_FORMAT,
};
use crate::logic::precog::{incident_label, score};
use crate::logic::storage::{read_checked, write_typed, DocumentStore, StoreError};
use crate::logic::variables::RawInputs;

pub struct IncidentRecorder<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
    limit: usize,
}

impl<'a, S: DocumentStore + ?Sized> IncidentRecorder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_limit(store, DEFAULT_INCIDENT_LIMIT)
    }

    /// Limit of 0 is raised to 1 so the newest incident is always kept
    pub fn with_limit(store: &'a S, limit: usize) -> Self {
        Self {
            store,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score and record, stamped with the current local time
    pub fn record_simulation(&self, inputs: &RawInputs) -> Result<SimulationRecord, StoreError> {
        self.record_at(inputs, Local::now().naive_local())
    }

    /// Score and record with an explicit timestamp
    pub fn record_at(
        &self,
        inputs: &RawInputs,
        at: NaiveDateTime,
    ) -> Result<SimulationRecord, StoreError> {
        let score_result = score(inputs);
        let mut entries = self.load_log();

        let taken: HashSet<&str> = entries.iter().map(|i| i.id.as_str()).collect();
        let id = fresh_id(&taken);

        let incident = Incident {
            schema_version: INCIDENT_SCHEMA_VERSION,
            id,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            score: score_result.score,
            pct: score_result.pct,
            label: incident_label(score_result.score),
            vars: inputs.clone(),
            protocol_activated: None,
            actions: Vec::new(),
        };

        entries.insert(0, incident.clone());
        if entries.len() > self.limit {
            log::debug!("Incident log over {} entries, dropping {}", self.limit, entries.len() - self.limit);
            entries.truncate(self.limit);
        }
        write_typed(self.store, INCIDENTS_FILE, &entries)?;

        log::info!(
            "Recorded incident {} (score {:.4}, {})",
            incident.id,
            incident.score,
            incident.label
        );

        Ok(SimulationRecord {
            score_result,
            incident,
        })
    }

    /// Full log, newest first. Legacy records are migrated in memory.
    pub fn load_log(&self) -> Vec<Incident> {
        let mut entries: Vec<Incident> =
            read_checked(self.store, INCIDENTS_FILE, Vec::new(), check_schema);
        for incident in entries.iter_mut() {
            migrate(incident);
        }
        entries
    }

    /// Newest `limit` incidents
    pub fn recent(&self, limit: usize) -> Vec<Incident> {
        let mut entries = self.load_log();
        entries.truncate(limit);
        entries
    }
}

/// Reject documents written by a newer engine
pub fn check_schema(entries: &Vec<Incident>) -> Result<(), StoreError> {
    match entries.iter().find(|i| i.schema_version > INCIDENT_SCHEMA_VERSION) {
        Some(newer) => Err(StoreError::UnsupportedSchema {
            document: INCIDENTS_FILE.to_string(),
            found: newer.schema_version,
            supported: INCIDENT_SCHEMA_VERSION,
        }),
        None => Ok(()),
    }
}

/// Bring an older record up to the current layout
pub fn migrate(incident: &mut Incident) {
    // v0/v1 share the same fields
    if incident.schema_version < INCIDENT_SCHEMA_VERSION {
        incident.schema_version = INCIDENT_SCHEMA_VERSION;
    }
}

/// 8 hex characters, unique among `taken`
fn fresh_id(taken: &HashSet<&str>) -> String {
    loop {
        let candidate = Uuid::new_v4().simple().to_string()[..INCIDENT_ID_LEN].to_string();
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}
