use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HathicheckError {
    /// No file in the package matched the component stem pattern at all.
    /// Continuing to look for missing component files would be meaningless.
    #[error("No files found with regex {pattern} in {}", path.display())]
    NoComponentFiles { path: PathBuf, pattern: String },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid component pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed schema resource {name}: {reason}")]
    SchemaResource { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HathicheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
