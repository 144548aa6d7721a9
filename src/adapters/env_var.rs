// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads settings and connection strings from
//! the process environment. It is the source behind `Accessor::from_env()`.

use crate::domain::ConnectionDescriptor;
use crate::ports::ConfigurationSource;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Variable name prefixes that mark a connection string, with the provider each implies.
const CONNECTION_PREFIXES: [(&str, &str); 5] = [
    ("SQLCONNSTR_", "sqlserver"),
    ("SQLAZURECONNSTR_", "sqlazure"),
    ("MYSQLCONNSTR_", "mysql"),
    ("POSTGRESQLCONNSTR_", "postgresql"),
    ("CUSTOMCONNSTR_", ""),
];

#[derive(Debug, Default)]
struct Snapshot {
    settings: HashMap<String, String>,
    connections: HashMap<String, ConnectionDescriptor>,
}

/// Configuration source adapter for environment variables.
///
/// Variables named with one of the connection-string prefixes become connections:
///
/// | Prefix               | Provider name |
/// |----------------------|---------------|
/// | `SQLCONNSTR_`        | `sqlserver`   |
/// | `SQLAZURECONNSTR_`   | `sqlazure`    |
/// | `MYSQLCONNSTR_`      | `mysql`       |
/// | `POSTGRESQLCONNSTR_` | `postgresql`  |
/// | `CUSTOMCONNSTR_`     | (empty)       |
///
/// so `POSTGRESQLCONNSTR_Main=Host=db` registers a connection named `Main`. Every other
/// variable is a setting. An optional prefix restricts settings to variables that carry
/// it, and is stripped from the key.
///
/// The environment is read once, on first lookup.
///
/// # Examples
///
/// ```rust
/// use appsettings::adapters::EnvVarSource;
///
/// // Read all environment variables
/// let source = EnvVarSource::new();
///
/// // Read only settings with a specific prefix
/// let source = EnvVarSource::with_prefix("APP_");
/// ```
#[derive(Debug)]
pub struct EnvVarSource {
    /// Optional prefix to filter setting variables
    prefix: Option<String>,
    /// Whether to convert setting keys to lowercase
    lowercase_keys: bool,
    /// Environment snapshot, loaded lazily
    snapshot: OnceCell<Snapshot>,
}

impl EnvVarSource {
    /// Creates a new environment variable source without prefix filtering.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            snapshot: OnceCell::new(),
        }
    }

    /// Creates a new environment variable source with prefix filtering.
    ///
    /// Only variables starting with the given prefix are read as settings, with the
    /// prefix stripped from the key. Connection-string variables are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appsettings::adapters::EnvVarSource;
    ///
    /// let source = EnvVarSource::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            lowercase_keys: false,
            snapshot: OnceCell::new(),
        }
    }

    /// Sets whether to convert setting keys to lowercase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appsettings::adapters::EnvVarSource;
    ///
    /// let source = EnvVarSource::new()
    ///     .lowercase_keys(true);
    /// ```
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Creates a source with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. The process
    /// environment is never read by a source created this way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appsettings::adapters::EnvVarSource;
    /// use appsettings::domain::ConnectionDescriptor;
    /// use appsettings::ports::ConfigurationSource;
    /// use std::collections::HashMap;
    ///
    /// let mut settings = HashMap::new();
    /// settings.insert("Test".to_string(), "5".to_string());
    /// let connections = vec![ConnectionDescriptor::new("Main", "Host=db", "postgresql")];
    ///
    /// let source = EnvVarSource::with_values(settings, connections);
    /// assert_eq!(source.setting("Test"), Some("5"));
    /// ```
    pub fn with_values(
        settings: HashMap<String, String>,
        connections: impl IntoIterator<Item = ConnectionDescriptor>,
    ) -> Self {
        let connections = connections
            .into_iter()
            .map(|conn| (conn.name().to_string(), conn))
            .collect();
        Self {
            prefix: None,
            lowercase_keys: false,
            snapshot: OnceCell::with_value(Snapshot {
                settings,
                connections,
            }),
        }
    }

    /// Splits a variable into a connection if its name carries a connection prefix.
    fn as_connection(key: &str, value: &str) -> Option<ConnectionDescriptor> {
        CONNECTION_PREFIXES.iter().find_map(|(prefix, provider)| {
            key.strip_prefix(prefix)
                .filter(|name| !name.is_empty())
                .map(|name| ConnectionDescriptor::new(name, value, *provider))
        })
    }

    /// Maps a variable name to a setting key, or `None` if it is filtered out.
    fn setting_key(&self, key: String) -> Option<String> {
        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?.to_string(),
            None => key,
        };
        if key.is_empty() {
            return None;
        }
        Some(if self.lowercase_keys {
            key.to_lowercase()
        } else {
            key
        })
    }

    /// Reads the process environment into a new snapshot.
    fn load(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for (key, value) in env::vars_os() {
            let (key, value) = match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => (key, value),
                (key, _) => {
                    tracing::debug!("Skipping non-UTF-8 environment variable: {:?}", key);
                    continue;
                }
            };

            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} \
                     (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            if let Some(connection) = Self::as_connection(&key, &value) {
                snapshot
                    .connections
                    .insert(connection.name().to_string(), connection);
                continue;
            }

            if let Some(setting_key) = self.setting_key(key) {
                snapshot.settings.insert(setting_key, value);
            }
        }

        tracing::debug!(
            "Loaded {} settings and {} connections from environment (prefix={:?}, lowercase={})",
            snapshot.settings.len(),
            snapshot.connections.len(),
            self.prefix,
            self.lowercase_keys
        );

        snapshot
    }

    fn snapshot(&self) -> &Snapshot {
        self.snapshot.get_or_init(|| self.load())
    }
}

impl Default for EnvVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationSource for EnvVarSource {
    fn name(&self) -> &str {
        "env"
    }

    fn setting(&self, key: &str) -> Option<&str> {
        self.snapshot().settings.get(key).map(String::as_str)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        self.snapshot().connections.get(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        self.snapshot().settings.keys().map(String::as_str).collect()
    }

    fn connection_names(&self) -> Vec<&str> {
        self.snapshot()
            .connections
            .keys()
            .map(String::as_str)
            .collect()
    }
}
