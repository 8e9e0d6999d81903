//! Error types for form configuration and key-date validation.
//!
//! Parsing and checksum functions in this crate are total and never fail.
//! [`FormError`] covers the fallible edges: loading a [`BindingConfig`],
//! resolving host field names, and validating stored key dates.
//!
//! [`BindingConfig`]: crate::config::BindingConfig

use thiserror::Error;

/// Error type for all fallible form operations.
#[derive(Error, Debug)]
pub enum FormError {
    /// A key date did not match the stored `YYYY-MM-DD` format.
    #[error("Invalid key date: {0}")]
    InvalidKeyDate(String),

    /// The host referred to a field name that is not bound.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Configuration JSON could not be decoded.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`FormError`].
pub type Result<T> = std::result::Result<T, FormError>;
