// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration source adapter.
//!
//! This module provides a source backed by plain hash maps. It is the usual test
//! double for code that depends on the accessor, and is also handy for settings
//! assembled by the application itself.

use crate::domain::ConnectionDescriptor;
use crate::ports::ConfigurationSource;
use std::collections::HashMap;

/// Configuration source backed by in-memory maps.
///
/// # Examples
///
/// ```rust
/// use appsettings::adapters::InMemorySource;
/// use appsettings::domain::ConnectionDescriptor;
/// use appsettings::ports::ConfigurationSource;
///
/// let source = InMemorySource::new()
///     .with_setting("Environment", "staging")
///     .with_connection(ConnectionDescriptor::new("Main", "Host=db", "postgresql"));
///
/// assert_eq!(source.setting("Environment"), Some("staging"));
/// assert_eq!(source.connection("Main").unwrap().provider_name(), "postgresql");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    settings: HashMap<String, String>,
    connections: HashMap<String, ConnectionDescriptor>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given settings and no connections.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appsettings::adapters::InMemorySource;
    /// use appsettings::ports::ConfigurationSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("Test".to_string(), "5".to_string());
    ///
    /// let source = InMemorySource::with_settings(values);
    /// assert_eq!(source.setting("Test"), Some("5"));
    /// ```
    pub fn with_settings(settings: HashMap<String, String>) -> Self {
        Self {
            settings,
            connections: HashMap::new(),
        }
    }

    /// Adds a setting, replacing any existing value for the key.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Adds a connection, keyed by its name.
    pub fn with_connection(mut self, connection: ConnectionDescriptor) -> Self {
        self.connections
            .insert(connection.name().to_string(), connection);
        self
    }

    /// Adds several connections, keyed by their names.
    pub fn with_connections(
        mut self,
        connections: impl IntoIterator<Item = ConnectionDescriptor>,
    ) -> Self {
        for connection in connections {
            self.connections
                .insert(connection.name().to_string(), connection);
        }
        self
    }

    /// Returns the number of settings held, not counting connections.
    pub fn settings_len(&self) -> usize {
        self.settings.len()
    }

    /// Returns the number of connections held.
    pub fn connections_len(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if the source holds neither settings nor connections.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.connections.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemorySource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let settings = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::with_settings(settings)
    }
}

impl ConfigurationSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        self.connections.get(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        self.settings.keys().map(String::as_str).collect()
    }

    fn connection_names(&self) -> Vec<&str> {
        self.connections.keys().map(String::as_str).collect()
    }
}
