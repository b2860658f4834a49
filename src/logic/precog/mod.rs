//! Precog Module
//!
//! Explainable risk scoring over the registered variables.
//!
//! ## Structure
//! - `types`: ScoreResult, Contribution
//! - `scorer`: Scoring logic (pure)
//! - `label`: Score → RiskLabel classifiers
//!
//! ## Usage
//! ```ignore
//! use war_room_core::logic::precog::{score, display_label};
//!
//! let result = score(&inputs);
//! let (label, color) = display_label(result.score);
//! println!("Riesgo: {}% — {}", result.pct, label);
//! ```

pub mod types;
pub mod scorer;
pub mod label;

pub use types::{Contribution, Contributions, ScoreResult};

pub use scorer::{score, sigmoid, to_pct, SCORE_SHIFT};

pub use label::{display_label, incident_label, RiskLabel};
