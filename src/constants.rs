//! Central Configuration Constants
//!
//! Single source of truth for defaults. Runtime overrides are read by
//! `logic::config::WarRoomConfig::from_env`.

/// Incident log document
pub const INCIDENTS_FILE: &str = "incidents.json";

/// Audit log document
pub const AUDIT_FILE: &str = "audit_logs.json";

/// Protocol book document (read-only input)
pub const PROTOCOLS_FILE: &str = "protocols.json";

/// Maximum incidents kept in the log (oldest dropped)
pub const DEFAULT_INCIDENT_LIMIT: usize = 500;

/// Entries shown in the live event feed
pub const DEFAULT_FEED_SIZE: usize = 20;

/// Entries shown in the history view
pub const HISTORY_VIEW_SIZE: usize = 50;

/// Current incident record layout.
/// MUST be incremented when the Incident fields change.
pub const INCIDENT_SCHEMA_VERSION: u8 = 1;

/// Timestamp format for incidents and audit entries (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Length of incident ids
pub const INCIDENT_ID_LEN: usize = 8;

/// App name (used for the default data directory)
pub const APP_NAME: &str = "war-room";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Environment variable names
// ============================================

pub const ENV_DATA_DIR: &str = "WAR_ROOM_DATA_DIR";
pub const ENV_INCIDENT_LIMIT: &str = "WAR_ROOM_INCIDENT_LIMIT";
pub const ENV_FEED_SIZE: &str = "WAR_ROOM_FEED_SIZE";
