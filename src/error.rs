//! Error types for the export pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::pack::PackError;

/// Errors that can abort an export run
#[derive(Error, Debug)]
pub enum ExportError {
    /// Icon name not present in the registry
    #[error("icon not found in registry: {name}")]
    UnknownIcon { name: String },

    /// Destination file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Icon pack failed to load
    #[error(transparent)]
    Pack(#[from] PackError),
}
