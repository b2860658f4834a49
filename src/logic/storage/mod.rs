//! Storage Module - Flat JSON documents
//!
//! `read` never fails: a missing or unreadable document is replaced on disk
//! by the supplied default, and the default is returned.
//!
//! ## Structure
//! - `error`: StoreError, name validation
//! - `store`: DocumentStore trait, JsonFileStore, MemoryStore

pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use error::StoreError;
pub use store::{DocumentStore, JsonFileStore, MemoryStore};

/// Read a document, self-healing to `default` on missing/corrupt
pub fn read<S: DocumentStore + ?Sized>(store: &S, name: &str, default: Value) -> Value {
    match store.load(name) {
        Ok(Some(value)) => value,
        Ok(None) => heal(store, name, default, None),
        Err(e) => heal(store, name, default, Some(e.to_string())),
    }
}

/// Overwrite a document
pub fn write<S: DocumentStore + ?Sized>(store: &S, name: &str, value: &Value) -> Result<(), StoreError> {
    store.save(name, value)
}

/// Typed read. A document that parses as JSON but not as `T` counts as corrupt.
pub fn read_typed<S, T>(store: &S, name: &str, default: T) -> T
where
    S: DocumentStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    read_checked(store, name, default, |_| Ok(()))
}

/// Typed read with an extra acceptance check (schema version, invariants).
/// A failing check counts as corrupt.
pub fn read_checked<S, T, F>(store: &S, name: &str, default: T, check: F) -> T
where
    S: DocumentStore + ?Sized,
    T: Serialize + DeserializeOwned,
    F: Fn(&T) -> Result<(), StoreError>,
{
    let reason = match store.load(name) {
        Ok(Some(value)) => match serde_json::from_value::<T>(value) {
            Ok(doc) => match check(&doc) {
                Ok(()) => return doc,
                Err(e) => Some(e.to_string()),
            },
            Err(e) => Some(StoreError::from(e).to_string()),
        },
        Ok(None) => None,
        Err(e) => Some(e.to_string()),
    };

    match serde_json::to_value(&default) {
        Ok(value) => {
            heal(store, name, value, reason);
        }
        Err(e) => log::error!("Cannot serialize default for {}: {}", name, e),
    }
    default
}

/// Typed write
pub fn write_typed<S, T>(store: &S, name: &str, doc: &T) -> Result<(), StoreError>
where
    S: DocumentStore + ?Sized,
    T: Serialize,
{
    let value = serde_json::to_value(doc)?;
    store.save(name, &value)
}

/// `reason` is None when the document simply does not exist yet
fn heal<S: DocumentStore + ?Sized>(store: &S, name: &str, default: Value, reason: Option<String>) -> Value {
    if let Some(reason) = reason {
        log::warn!("Document {} unreadable ({}), resetting to default", name, reason);
    }
    if let Err(e) = store.save(name, &default) {
        log::error!("Failed to write default for {}: {}", name, e);
    }
    default
}
