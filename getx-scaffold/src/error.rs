//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::templates::TemplateKind;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Page name was empty
    #[error("Page name cannot be empty")]
    EmptyPageName,

    /// Page name cannot be used as a folder name
    #[error("Invalid page name '{name}': must not be '.', '..' or contain path separators")]
    InvalidPageName {
        /// The rejected page name
        name: String,
    },

    /// Target directory does not exist
    #[error("Target directory does not exist: {}", path.display())]
    TargetNotFound {
        /// The missing target path
        path: PathBuf,
    },

    /// Target path exists but is not a directory
    #[error("Target path is not a directory: {}", path.display())]
    TargetNotDirectory {
        /// The offending target path
        path: PathBuf,
    },

    /// File extension setting is unusable
    #[error("Invalid file extension '{extension}': must be non-empty, without a leading dot or path separators")]
    InvalidExtension {
        /// The rejected extension
        extension: String,
    },

    /// Output folder could not be created
    #[error("Failed to create directory: {}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be written
    #[error("Failed to write file: {}", path.display())]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed
    #[error("Failed to render {kind} template")]
    Template {
        /// Template that failed
        kind: TemplateKind,
        /// Underlying template engine error
        #[source]
        source: minijinja::Error,
    },
}

/// Result alias for scaffold operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
