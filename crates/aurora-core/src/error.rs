//! Error types for aurora-core

use thiserror::Error;

/// Result type alias using aurora-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Aurora
#[derive(Error, Debug)]
pub enum Error {
    /// Document failed schema validation; every violation is listed
    #[error("Validation failed: {errors}")]
    SchemaValidation { errors: String },

    /// Schema not found
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// Invalid schema or configuration document
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// Destination already exists and will not be overwritten
    #[error("{path} already exists")]
    AlreadyExists { path: String },

    /// Expected file or directory is absent
    #[error("{what} not found")]
    NotFound { what: String },

    /// Operation is gated to a different operating system
    #[error("The {operation} command is only supported on {required}")]
    PlatformUnsupported { operation: String, required: String },

    /// Name that cannot be used as a directory under the working directory
    #[error("Invalid name \"{name}\": must be a single directory name")]
    InvalidName { name: String },

    /// User aborted an interactive prompt
    #[error("Operation cancelled by the user")]
    Cancelled,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a schema validation error from a list of violations
    pub fn schema_validation(errors: Vec<String>) -> Self {
        Self::SchemaValidation {
            errors: errors.join(", "),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a not found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a platform unsupported error
    pub fn platform_unsupported(operation: impl Into<String>, required: impl Into<String>) -> Self {
        Self::PlatformUnsupported {
            operation: operation.into(),
            required: required.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Whether this error belongs to the anticipated taxonomy.
    ///
    /// Anticipated errors are reported to the user; everything else is also
    /// appended to the error log.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::JsonParse(_))
    }
}
