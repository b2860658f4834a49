//! Incident Module
//!
//! Persisted record of every risk-scoring invocation.
//!
//! ## Structure
//! - `types`: Incident, SimulationRecord
//! - `recorder`: Score → Incident → incident log

pub mod types;
pub mod recorder;


pub use types::{Incident, SimulationRecord};

pub use recorder::IncidentRecorder;
