//! Protocol Module
//!
//! Decides which emergency protocol is active from raw field conditions,
//! and exposes the protocol book (`protocols.json`) for display.
//!
//! ## Structure
//! - `types`: ProtocolLabel, Variant, ProtocolStatus, ProtocolBook
//! - `rules`: Trigger thresholds
//! - `evaluator`: Rule evaluation (first match wins)
//!
//! ## Usage
//! ```ignore
//! use war_room_core::logic::protocol::{evaluate, load_book};
//!
//! let status = evaluate(wind, flood_cm, temp, traffic_pct);
//! if let Some(def) = load_book(&store).for_status(&status) {
//!     for (i, step) in def.steps.iter().enumerate() {
//!         println!("{}. {}", i + 1, step);
//!     }
//! }
//! ```

pub mod types;
pub mod rules;
pub mod evaluator;

pub use types::{ProtocolBook, ProtocolDefinition, ProtocolLabel, ProtocolStatus, Variant};

pub use evaluator::{conditions_as_inputs, evaluate};

use crate::constants::PROTOCOLS_FILE;
use crate::logic::storage::{read_typed, DocumentStore};

/// Load `protocols.json` (empty book if missing or unreadable)
pub fn load_book<S: DocumentStore + ?Sized>(store: &S) -> ProtocolBook {
    read_typed(store, PROTOCOLS_FILE, ProtocolBook::default())
}
