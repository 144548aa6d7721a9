// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the settings accessor.
//!
//! This module defines the errors surfaced by the required accessor operations,
//! plus the lower-level [`ConversionError`] produced when a raw setting value cannot
//! be converted to a requested type. All errors use `thiserror`.

use thiserror::Error;

/// The main error type for accessor operations.
///
/// Every variant is a recoverable configuration error describing a missing or
/// malformed entry. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use appsettings::domain::errors::ConfigError;
///
/// fn get_database_host() -> Result<String, ConfigError> {
///     Err(ConfigError::MissingRequiredSetting {
///         key: "DatabaseHost".to_string(),
///     })
/// }
///
/// assert_eq!(
///     get_database_host().unwrap_err().to_string(),
///     "Required setting 'DatabaseHost' is missing"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required setting is absent, empty, or whitespace-only.
    #[error("Required setting '{key}' is missing")]
    MissingRequiredSetting {
        /// The key that was looked up
        key: String,
    },

    /// A required setting is present but could not be converted to the requested type.
    #[error(
        "Required setting '{key}' is invalid: unable to convert '{value}' to type \
         '{target_type}'"
    )]
    InvalidSetting {
        /// The key that was looked up
        key: String,
        /// The raw value as stored in the source
        value: String,
        /// The name of the requested type
        target_type: String,
        /// The underlying conversion failure
        #[source]
        source: ConversionError,
    },

    /// No connection is registered under the requested name.
    #[error("Required connection '{name}' is missing")]
    MissingRequiredConnection {
        /// The connection name that was looked up
        name: String,
    },

    /// A connection is registered but its connection string is blank.
    #[error("Required connection '{name}' is empty")]
    EmptyRequiredConnection {
        /// The connection name that was looked up
        name: String,
    },
}

impl ConfigError {
    /// Returns the setting key or connection name this error refers to.
    pub fn subject(&self) -> &str {
        match self {
            ConfigError::MissingRequiredSetting { key } => key,
            ConfigError::InvalidSetting { key, .. } => key,
            ConfigError::MissingRequiredConnection { name } => name,
            ConfigError::EmptyRequiredConnection { name } => name,
        }
    }
}

/// A failure to convert a raw setting string into a typed value.
///
/// Conversion functions, including custom converters passed to the accessor,
/// report failures with this type.
///
/// # Examples
///
/// ```
/// use appsettings::domain::errors::ConversionError;
///
/// let err = ConversionError::new("u16", "number too large to fit in target type");
/// assert_eq!(err.target_type(), "u16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert to {target_type}: {message}")]
pub struct ConversionError {
    target_type: String,
    message: String,
}

impl ConversionError {
    /// Creates a new conversion error for the given target type.
    pub fn new(target_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            message: message.into(),
        }
    }

    /// Creates a conversion error from any displayable parse error.
    pub fn from_parse_error<E: std::fmt::Display>(target_type: impl Into<String>, err: E) -> Self {
        Self::new(target_type, err.to_string())
    }

    /// Returns the name of the type the value was being converted to.
    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    /// Returns the reason the conversion failed.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A specialized Result type for accessor operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
