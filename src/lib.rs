//! FrameLeague Importer Library
//!
//! A Rust library for migrating league data out of the legacy desktop league
//! manager's proprietary binary table files into the FrameLeague data store.
//!
//! This library provides tools for:
//! - Parsing the legacy engine's fixed-layout table headers, including
//!   heuristic field-name recovery
//! - Walking block-chained fixed-width records without ever overrunning
//!   truncated files
//! - Decoding the engine's bias-encoded numerics, byte-reversed floats,
//!   day-count dates and millisecond times
//! - Mapping raw records into typed staging rows for seven entity kinds
//! - Orchestrating a dependency-ordered, idempotent import with legacy-id
//!   to stable-id mapping and a structured summary
//! - Scanning source directories to report which table files are present

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod entity_parsers;
        pub mod importer;
        pub mod source_scanner;
        pub mod table_reader;
    }
    pub mod adapters {
        pub mod memory_store;
        pub mod store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::memory_store::MemoryStore;
pub use app::adapters::store::LeagueStore;
pub use app::models::{EntityKind, Winner};
pub use app::services::importer::{ImportSummary, LegacyImporter};
pub use config::ImportOptions;

/// Result type alias for the FrameLeague importer
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Table file too short to contain the fixed header fields
    #[error("Corrupt table header in '{file}': {message}")]
    CorruptHeader { file: String, message: String },

    /// Target store operation failed
    #[error("Store error: {message}")]
    Store { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// An import run completed but recorded hard errors
    #[error("Import finished with {count} error(s); see the summary for details")]
    ImportFailed { count: usize },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a corrupt header error
    pub fn corrupt_header(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptHeader {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an import-failed error
    pub fn import_failed(count: usize) -> Self {
        Self::ImportFailed { count }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
