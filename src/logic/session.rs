//! Session Feed
//!
//! Per-session list of events shown to the operator. Seeded once from the
//! incident log, then only fed by the session's own recordings. Owned by
//! the caller and never written back.

use crate::logic::incident::{Incident, IncidentRecorder, SimulationRecord};
use crate::logic::storage::{DocumentStore, StoreError};
use crate::logic::variables::RawInputs;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFeed {
    events: Vec<Incident>,
}

impl SessionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the persisted log (newest first)
    pub fn seeded<S: DocumentStore + ?Sized>(recorder: &IncidentRecorder<'_, S>) -> Self {
        Self {
            events: recorder.load_log(),
        }
    }

    /// Newest event goes on top
    pub fn push(&mut self, incident: Incident) {
        self.events.insert(0, incident);
    }

    /// Record a simulation and put its incident on the feed
    pub fn simulate<S: DocumentStore + ?Sized>(
        &mut self,
        recorder: &IncidentRecorder<'_, S>,
        inputs: &RawInputs,
    ) -> Result<SimulationRecord, StoreError> {
        let record = recorder.record_simulation(inputs)?;
        self.push(record.incident.clone());
        Ok(record)
    }

    pub fn recent(&self, n: usize) -> &[Incident] {
        &self.events[..n.min(self.events.len())]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::storage::MemoryStore;
    use crate::logic::variables::default_inputs;

    #[test]
    fn test_seeded_from_log() {
        let store = MemoryStore::new();
        let recorder = IncidentRecorder::new(&store);
        recorder.record_simulation(&default_inputs()).unwrap();
        recorder.record_simulation(&default_inputs()).unwrap();

        let feed = SessionFeed::seeded(&recorder);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_simulate_pushes_front() {
        let store = MemoryStore::new();
        let recorder = IncidentRecorder::new(&store);
        recorder.record_simulation(&default_inputs()).unwrap();

        let mut feed = SessionFeed::seeded(&recorder);
        let record = feed.simulate(&recorder, &default_inputs()).unwrap();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.recent(1)[0].id, record.incident.id);
        assert_eq!(feed.recent(20).len(), 2);
    }

    #[test]
    fn test_not_reconciled_with_other_writers() {
        let store = MemoryStore::new();
        let recorder = IncidentRecorder::new(&store);
        let feed = SessionFeed::seeded(&recorder);

        // Another writer records after the session started
        recorder.record_simulation(&default_inputs()).unwrap();
        assert!(feed.is_empty());
        assert_eq!(recorder.load_log().len(), 1);
    }
}
