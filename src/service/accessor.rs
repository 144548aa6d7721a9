// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default accessor implementation.
//!
//! This module provides `Accessor`, the implementation of the `Configuration` trait
//! over any `ConfigurationSource`.

use crate::domain::{ConfigError, Configuration, ConnectionDescriptor, ConversionError, Result};
use crate::ports::ConfigurationSource;

/// Typed, validated access to a configuration source.
///
/// The accessor holds nothing but its source and never mutates it. Every operation
/// performs a single lookup, so the source may be shared between threads.
///
/// # Examples
///
/// ```rust
/// use appsettings::adapters::InMemorySource;
/// use appsettings::domain::{ConfigError, Configuration, ConnectionDescriptor};
/// use appsettings::service::Accessor;
///
/// let source = InMemorySource::new()
///     .with_setting("Port", "8080")
///     .with_connection(ConnectionDescriptor::new("Main", "", "postgresql"));
/// let config = Accessor::new(source);
///
/// let port: u16 = config.get_setting_as("Port", true).unwrap();
/// assert_eq!(port, 8080);
///
/// let err = config.get_connection("Main").unwrap_err();
/// assert!(matches!(err, ConfigError::EmptyRequiredConnection { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct Accessor<S> {
    source: S,
}

impl<S: ConfigurationSource> Accessor<S> {
    /// Creates an accessor over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the accessor, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Looks up a setting, treating empty and whitespace-only values as absent.
    fn raw_setting(&self, key: &str) -> Option<&str> {
        self.source
            .setting(key)
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(feature = "env")]
impl Accessor<crate::adapters::EnvVarSource> {
    /// Creates an accessor over the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appsettings::domain::Configuration;
    /// use appsettings::service::Accessor;
    ///
    /// let config = Accessor::from_env();
    /// let workers = config.get_setting_or_default_as("APPSETTINGS_DOC_WORKERS", 4u32);
    /// assert_eq!(workers, 4);
    /// ```
    pub fn from_env() -> Self {
        Self::new(crate::adapters::EnvVarSource::new())
    }

    /// Creates an accessor over environment variables carrying the given prefix.
    pub fn from_env_with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(crate::adapters::EnvVarSource::with_prefix(prefix))
    }
}

impl<S: ConfigurationSource> Configuration for Accessor<S> {
    fn get_setting(&self, key: &str, required: bool) -> Result<String> {
        match self.raw_setting(key) {
            Some(value) => Ok(value.to_string()),
            None if required => Err(ConfigError::MissingRequiredSetting {
                key: key.to_string(),
            }),
            None => Ok(String::new()),
        }
    }

    fn get_setting_as_with<T, F>(&self, key: &str, required: bool, converter: F) -> Result<T>
    where
        T: Default,
        F: Fn(&str) -> std::result::Result<T, ConversionError>,
    {
        let Some(value) = self.raw_setting(key) else {
            if required {
                return Err(ConfigError::MissingRequiredSetting {
                    key: key.to_string(),
                });
            }
            return Ok(T::default());
        };

        match converter(value) {
            Ok(converted) => Ok(converted),
            Err(source) if required => Err(ConfigError::InvalidSetting {
                key: key.to_string(),
                value: value.to_string(),
                target_type: source.target_type().to_string(),
                source,
            }),
            Err(source) => {
                tracing::debug!(
                    "Optional setting '{}' from source '{}' is invalid, using default: {}",
                    key,
                    self.source.name(),
                    source
                );
                Ok(T::default())
            }
        }
    }

    fn get_setting_or_default_as_with<T, F>(&self, key: &str, default_value: T, converter: F) -> T
    where
        F: Fn(&str) -> std::result::Result<T, ConversionError>,
    {
        let Some(value) = self.raw_setting(key) else {
            return default_value;
        };

        converter(value).unwrap_or_else(|source| {
            tracing::debug!(
                "Setting '{}' from source '{}' is invalid, using default: {}",
                key,
                self.source.name(),
                source
            );
            default_value
        })
    }

    fn has_setting(&self, key: &str) -> bool {
        self.raw_setting(key).is_some()
    }

    fn get_connection(&self, name: &str) -> Result<&ConnectionDescriptor> {
        let connection =
            self.source
                .connection(name)
                .ok_or_else(|| ConfigError::MissingRequiredConnection {
                    name: name.to_string(),
                })?;

        if connection.is_blank() {
            return Err(ConfigError::EmptyRequiredConnection {
                name: name.to_string(),
            });
        }

        Ok(connection)
    }
}
