use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document name: {0:?}")]
    InvalidName(String),

    #[error("Unsupported schema in {document}: found v{found}, engine supports up to v{supported}")]
    UnsupportedSchema {
        document: String,
        found: u8,
        supported: u8,
    },
}

/// Reject names that would escape the data directory
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let bad = name.trim().is_empty()
        || name.starts_with('.')
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
