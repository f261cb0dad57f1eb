//! Error types for the exemplar crate.
//!
//! Each concern gets its own enum so callers can match on exactly the
//! failures an operation can produce.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised when constructing a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The lower bound is greater than the upper bound.
    #[error("Range start {start} is greater than its end {end}")]
    InvertedBounds { start: i64, end: i64 },
}

/// Errors that can occur while delivering a message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A field required for delivery was never set.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Writing the delivery confirmation failed.
    #[error("I/O error during delivery: {0}")]
    Io(#[from] io::Error),
}

impl DeliveryError {
    /// Returns `true` if the message itself was incomplete, rather than the
    /// transport failing.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

/// Errors raised when a loosely-typed value is turned into a typed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value was of the wrong kind entirely.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The value had the right kind but lies outside the accepted range.
    #[error("Value {value} is out of range for {field}")]
    OutOfRange { field: &'static str, value: i64 },

    /// The value is not a member of a closed set of categories.
    #[error("Unknown {kind}: {value}")]
    UnknownCategory { kind: &'static str, value: String },
}

impl ValueError {
    /// Returns `true` if the wrong kind of value was supplied.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `EXEMPLAR_CONFIG` names a file that does not exist.
    #[error("EXEMPLAR_CONFIG points to non-existent file: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file is not valid TOML, or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration value could not be converted.
    #[error("Invalid config value: {0}")]
    Value(#[from] ValueError),
}
