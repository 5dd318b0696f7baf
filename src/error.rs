//! Error types for standards-mcp.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation. Every message is self-contained prose:
//! the calling agent must be able to correct its arguments from the
//! message alone.

use crate::registry::Namespace;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level server error.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Document registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The key is not in the registered set for the namespace. The message
    /// enumerates every valid key so the caller can retry without a lookup.
    #[error("Unknown {namespace} '{key}'. Valid keys: {}", .valid.join(", "))]
    UnknownKey {
        namespace: Namespace,
        key: String,
        valid: Vec<&'static str>,
    },

    /// The key is registered but the backing file is missing or unreadable.
    #[error("Document file not found or unreadable: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Search operation errors.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search keyword must be a non-empty string")]
    EmptyQuery,
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
