use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a documentation run.
#[derive(Error, Debug)]
pub enum DocletError {
    /// Indicates a failure in reading a file, wrapping the underlying IO error.
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// A page could not be written. The run stops at the first such failure.
    #[error("Failed to write {path}: {source}")]
    WriteError {
        /// Absolute path of the page.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The model is not valid JSON or does not have the expected shape.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// The model was written for an incompatible format version.
    #[error("Unsupported model format version {found} (expected {expected})")]
    UnsupportedFormat {
        /// Version declared by the model.
        found: String,
        /// Versions this build reads.
        expected: String,
    },

    /// A package group pattern could not be compiled.
    #[error("Invalid group pattern {pattern:?}: {source}")]
    InvalidGroupPattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// A package group specification could not be parsed.
    #[error("Invalid group specification: {0}")]
    InvalidGroup(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, DocletError>;
