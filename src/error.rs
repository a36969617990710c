//! Error types for the crate's fallible edges.
//!
//! Conversion and key-walking never fail: unrecognized targets degrade to
//! passthrough and every value shape has a handling branch. Errors only occur
//! at the API edges that parse or extract:
//!
//! - [`CaseStyle::from_str`](crate::CaseStyle) on an unrecognized style tag
//! - `TryFrom<Value>` extraction of a scalar into the wrong Rust type
//!
//! ## Examples
//!
//! ```rust
//! use keycase::CaseStyle;
//!
//! let err = "screaming".parse::<CaseStyle>().unwrap_err();
//! assert_eq!(err.to_string(), "unknown case style: screaming");
//! ```

use thiserror::Error;

/// Errors produced by the crate's parsing and extraction APIs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A style tag that names none of the supported conventions.
    #[error("unknown case style: {0}")]
    UnknownStyle(String),

    /// A `TryFrom<Value>` extraction found a different value shape.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl Error {
    /// Creates a [`Error::TypeMismatch`] from an expected type name and the
    /// offending value's description.
    pub fn mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}

/// Alias for `std::result::Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
