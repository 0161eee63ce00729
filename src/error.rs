//! Error types for template processing.
//!
//! This module provides the [`Error`] enum which represents every failure a
//! caller can observe while filling a template container, along with a
//! convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. Unmatched
//! tokens, unknown member names and empty data sources are *not* errors: they
//! are tolerated silently and never reach this type.
//!
//! ```rust,no_run
//! use docx_template::{Error, TemplateEngine};
//! use std::collections::BTreeMap;
//!
//! fn fill(source: &str, destination: &str) -> docx_template::Result<()> {
//!     let mut data = BTreeMap::new();
//!     data.insert("Name", "Ada");
//!
//!     match TemplateEngine::new().process_file(source, destination, &data) {
//!         Ok(_) => Ok(()),
//!         Err(Error::MissingEntry { path }) => {
//!             eprintln!("{} is not a word document (no {})", source, path);
//!             Err(Error::MissingEntry { path })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;

use zip::result::ZipError;

/// The main error type for template processing.
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | Reading the source, writing the destination |
/// | Layout | [`MissingEntry`][Self::MissingEntry] | Container lacks the document body |
/// | Format | [`InvalidContainer`][Self::InvalidContainer], [`InvalidEncoding`][Self::InvalidEncoding] | Not a zip file, body not UTF-8 |
/// | Resources | [`ResourceLimitExceeded`][Self::ResourceLimitExceeded] | Oversized document body |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading the source, writing the
    /// destination or committing the rewritten container.
    ///
    /// These are propagated unchanged; nothing is retried.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container does not hold the expected entry.
    ///
    /// For template processing the path is always
    /// [`DOCUMENT_XML_PATH`](crate::edit::DOCUMENT_XML_PATH).
    #[error("Can't find {path} in template container")]
    MissingEntry {
        /// The entry path that was looked up.
        path: String,
    },

    /// The source bytes could not be read as a zip container.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// The entry exists but its content is not valid UTF-8 text.
    #[error("Entry {path} is not valid UTF-8 text")]
    InvalidEncoding {
        /// The entry path that failed to decode.
        path: String,
    },

    /// The inflated document entry is larger than the configured cap.
    ///
    /// See [`ProcessOptions::max_document_size`](crate::ProcessOptions::max_document_size).
    #[error("Resource limit exceeded: {0}")]
    ResourceLimitExceeded(String),

    /// A value could not be converted into a data source.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the container lacked the requested entry.
    pub fn is_missing_entry(&self) -> bool {
        matches!(self, Error::MissingEntry { .. })
    }

    /// Returns `true` if this is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Returns the entry path associated with this error, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docx_template::Error;
    ///
    /// fn log_error(error: &Error) {
    ///     if let Some(path) = error.entry_path() {
    ///         eprintln!("Error for '{}': {}", path, error);
    ///     }
    /// }
    /// ```
    pub fn entry_path(&self) -> Option<&str> {
        match self {
            Error::MissingEntry { path } => Some(path.as_str()),
            Error::InvalidEncoding { path } => Some(path.as_str()),
            _ => None,
        }
    }

    /// Creates a MissingEntry error for `path`.
    pub fn missing_entry(path: impl Into<String>) -> Self {
        Error::MissingEntry { path: path.into() }
    }
}

impl From<ZipError> for Error {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(e) => Error::Io(e),
            other => Error::InvalidContainer(other.to_string()),
        }
    }
}

/// A specialized Result type for template operations.
pub type Result<T> = std::result::Result<T, Error>;
