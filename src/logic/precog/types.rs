//! Precog Types
//!
//! Score output and per-variable breakdown. No logic beyond lookup.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One variable's share of the weighted sum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    /// Raw input, before clipping
    pub value: f64,
    /// Clipped and scaled to [0, 1]
    pub normalized: f64,
    pub weight: f64,
    /// weight * normalized
    pub weighted_contribution: f64,
    /// Share of the weighted sum, in percent
    pub pct_of_total: f64,
}

/// Contributions in weight-table order.
///
/// Serialized as a JSON object keyed by variable name, keeping that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contributions {
    entries: Vec<(&'static str, Contribution)>,
}

impl Contributions {
    pub(crate) fn push(&mut self, name: &'static str, contribution: Contribution) {
        self.entries.push((name, contribution));
    }

    pub fn get(&self, name: &str) -> Option<&Contribution> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Contribution)> {
        self.entries.iter().map(|(n, c)| (*n, c))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted by share, largest first (for bar charts)
    pub fn ranked(&self) -> Vec<(&'static str, &Contribution)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.pct_of_total
                .partial_cmp(&a.1.pct_of_total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

impl Serialize for Contributions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, contribution) in &self.entries {
            map.serialize_entry(name, contribution)?;
        }
        map.end()
    }
}

/// Result of one scoring call. Recomputed every time, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Risk score in [0, 1], 4 decimals
    pub score: f64,
    /// round(score * 100)
    pub pct: u8,
    pub contributions: Contributions,
}
