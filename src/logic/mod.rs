//! Logic Module - Scoring, rules & records
//!
//! Engines: Precog (risk scoring), Protocol (rule evaluation),
//! Incident (recording), Audit, and the flat JSON store underneath.
//!
//! ## Data flow
//! inputs → `precog::score` → `incident::IncidentRecorder` → `storage`
//! conditions → `protocol::evaluate` → `audit::notify`

// Configuration
pub mod config;

// Core engines
pub mod variables;
pub mod precog;
pub mod protocol;
pub mod incident;

// Persistence
pub mod storage;
pub mod audit;

// Caller-owned state
pub mod session;
