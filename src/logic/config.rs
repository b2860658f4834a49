//! Runtime configuration
//!
//! Loaded from environment variables with fallback to `constants`.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    APP_NAME, DEFAULT_FEED_SIZE, DEFAULT_INCIDENT_LIMIT, ENV_DATA_DIR, ENV_FEED_SIZE,
    ENV_INCIDENT_LIMIT,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WarRoomConfig {
    /// Directory holding the JSON documents
    pub data_dir: PathBuf,

    /// Max incidents retained in the log
    pub incident_limit: usize,

    /// Entries shown in the live feed
    pub feed_size: usize,
}

impl Default for WarRoomConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            incident_limit: DEFAULT_INCIDENT_LIMIT,
            feed_size: DEFAULT_FEED_SIZE,
        }
    }
}

impl WarRoomConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    /// Unparseable or zero limits fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            data_dir: lookup(ENV_DATA_DIR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),

            incident_limit: lookup(ENV_INCIDENT_LIMIT)
                .and_then(|s| s.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_INCIDENT_LIMIT),

            feed_size: lookup(ENV_FEED_SIZE)
                .and_then(|s| s.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_FEED_SIZE),
        }
    }
}

/// Default data directory: `{data_local_dir}/war-room/data`, or `./data`
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = WarRoomConfig::from_lookup(|_| None);
        assert_eq!(config.incident_limit, 500);
        assert_eq!(config.feed_size, 20);
        assert!(config.data_dir.ends_with("data"));
    }

    #[test]
    fn test_overrides() {
        let config = WarRoomConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/war-room-test"),
            (ENV_INCIDENT_LIMIT, "25"),
            (ENV_FEED_SIZE, " 5 "),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/war-room-test"));
        assert_eq!(config.incident_limit, 25);
        assert_eq!(config.feed_size, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = WarRoomConfig::from_lookup(lookup_from(&[
            (ENV_INCIDENT_LIMIT, "lots"),
            (ENV_FEED_SIZE, "0"),
        ]));
        assert_eq!(config.incident_limit, DEFAULT_INCIDENT_LIMIT);
        assert_eq!(config.feed_size, DEFAULT_FEED_SIZE);
    }
}
