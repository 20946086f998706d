//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tautmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Extraction failed on one file's text. Caught at the file boundary and
    /// recorded on the `FileResult`; it never aborts a batch.
    #[error("Parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a parse error located at a byte offset of the scanned text
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Attach the underlying io error to a file system error
    pub fn with_io_source(self, error: std::io::Error) -> Self {
        match self {
            Self::FileSystem { message, path, .. } => Self::FileSystem {
                message,
                path,
                source: Some(error),
            },
            other => other,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    #[cfg(test)]
    fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
