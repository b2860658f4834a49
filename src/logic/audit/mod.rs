//! Audit Log Module - Operator actions
//!
//! Log format: JSON array, newest first, unbounded.
//! Location: {data_dir}/audit_logs.json

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{AUDIT_FILE, TIMESTAMP_FORMAT};
use crate::logic::protocol::ProtocolStatus;
use crate::logic::storage::{read_typed, write_typed, DocumentStore, StoreError};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub detail: String,
}

impl AuditLogEntry {
    pub fn new(action: &str, detail: &str, at: NaiveDateTime) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            action: action.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Quick actions available next to the protocol banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Notify,
    AssignResponsible,
    MarkStepExecuted,
}

impl QuickAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickAction::Notify => "Notificar",
            QuickAction::AssignResponsible => "Asignar Responsable",
            QuickAction::MarkStepExecuted => "Marcar paso ejecutado",
        }
    }

    /// Only notifications leave an audit trail
    pub fn is_audited(&self) -> bool {
        matches!(self, QuickAction::Notify)
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Prepend an entry stamped with the current local time
pub fn append_audit<S: DocumentStore + ?Sized>(
    store: &S,
    action: &str,
    detail: &str,
) -> Result<AuditLogEntry, StoreError> {
    append_entry(store, AuditLogEntry::new(action, detail, Local::now().naive_local()))
}

/// Prepend a prepared entry
pub fn append_entry<S: DocumentStore + ?Sized>(
    store: &S,
    entry: AuditLogEntry,
) -> Result<AuditLogEntry, StoreError> {
    let mut entries = load_all(store);
    entries.insert(0, entry.clone());
    write_typed(store, AUDIT_FILE, &entries)?;

    log::info!("Audit: {} — {}", entry.action, entry.detail);
    Ok(entry)
}

/// Record the "Notificar" quick action for the current protocol state
pub fn notify<S: DocumentStore + ?Sized>(
    store: &S,
    status: &ProtocolStatus,
) -> Result<AuditLogEntry, StoreError> {
    append_audit(store, QuickAction::Notify.as_str(), &notify_detail(status))
}

/// `Estado: <protocol>` or `Estado: None` when nothing is active
pub fn notify_detail(status: &ProtocolStatus) -> String {
    match status.protocol {
        Some(p) => format!("Estado: {}", p),
        None => "Estado: None".to_string(),
    }
}

/// Newest `limit` entries
pub fn list_audit<S: DocumentStore + ?Sized>(store: &S, limit: usize) -> Vec<AuditLogEntry> {
    let mut entries = load_all(store);
    entries.truncate(limit);
    entries
}

fn load_all<S: DocumentStore + ?Sized>(store: &S) -> Vec<AuditLogEntry> {
    read_typed(store, AUDIT_FILE, Vec::new())
}

// ============================================================================
// TESTS
// ============================================================================
