use thiserror::Error;

/// Errors that can occur while loading a test document from its serialized form.
///
/// Operations on an already loaded document never fail; stale or malformed paths
/// degrade to `None` or a no-op instead.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse test JSON: {0}")]
    JsonParseError(String),

    #[error("Document is not a test: expected an object with a string 'name' and an 'actions' array")]
    NotATest,

    #[error("Could not read test document '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while loading an action catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Catalog entry '{name}' in section '{section}' is invalid: {message}")]
    InvalidEntry {
        section: String,
        name: String,
        message: String,
    },

    #[error("Could not read catalog '{path}': {message}")]
    Io { path: String, message: String },
}
