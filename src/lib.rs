//! War Room Core
//!
//! Explainable risk scoring, emergency protocol selection and the JSON
//! incident/audit log behind the operations dashboard.

pub mod constants;
pub mod logic;

pub use logic::config::WarRoomConfig;
pub use logic::incident::{Incident, IncidentRecorder, SimulationRecord};
pub use logic::precog::{score, RiskLabel, ScoreResult};
pub use logic::protocol::{evaluate, ProtocolStatus};
pub use logic::storage::{DocumentStore, JsonFileStore, MemoryStore, StoreError};
