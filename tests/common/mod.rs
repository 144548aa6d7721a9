// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for integration tests.

use appsettings::domain::ConnectionDescriptor;
use appsettings::ports::ConfigurationSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A mock configuration source that counts lookups.
///
/// This allows tests to check how many times the accessor reads the source.
#[derive(Debug, Default)]
pub struct MockConfigSource {
    settings: HashMap<String, String>,
    connections: HashMap<String, ConnectionDescriptor>,
    setting_lookups: AtomicUsize,
    connection_lookups: AtomicUsize,
}

#[allow(dead_code)]
impl MockConfigSource {
    /// Creates an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting to the mock source.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Adds a connection to the mock source.
    pub fn with_connection(
        mut self,
        name: &str,
        connection_string: &str,
        provider_name: &str,
    ) -> Self {
        self.connections.insert(
            name.to_string(),
            ConnectionDescriptor::new(name, connection_string, provider_name),
        );
        self
    }

    /// Returns how many setting lookups have been made.
    pub fn setting_lookups(&self) -> usize {
        self.setting_lookups.load(Ordering::SeqCst)
    }

    /// Returns how many connection lookups have been made.
    pub fn connection_lookups(&self) -> usize {
        self.connection_lookups.load(Ordering::SeqCst)
    }
}

impl ConfigurationSource for MockConfigSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn setting(&self, key: &str) -> Option<&str> {
        self.setting_lookups.fetch_add(1, Ordering::SeqCst);
        self.settings.get(key).map(String::as_str)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        self.connection_lookups.fetch_add(1, Ordering::SeqCst);
        self.connections.get(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        self.settings.keys().map(String::as_str).collect()
    }

    fn connection_names(&self) -> Vec<&str> {
        self.connections.keys().map(String::as_str).collect()
    }
}
