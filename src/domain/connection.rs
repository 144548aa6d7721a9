// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named connection descriptors.
//!
//! A connection descriptor is the record stored in a source's connection registry:
//! a name, the connection string itself, and the provider it is intended for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named connection string and its provider.
///
/// Descriptors are owned by a configuration source and handed out by reference.
/// All three fields are passed through verbatim; only the connection string is
/// checked for blankness by the accessor.
///
/// Serialized field names follow the `{name, connectionString, providerName}`
/// record shape.
///
/// # Examples
///
/// ```
/// use appsettings::domain::ConnectionDescriptor;
///
/// let conn = ConnectionDescriptor::new("Main", "Server=db;Database=app", "postgresql");
/// assert_eq!(conn.name(), "Main");
/// assert_eq!(conn.connection_string(), "Server=db;Database=app");
/// assert_eq!(conn.provider_name(), "postgresql");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDescriptor {
    name: String,
    connection_string: String,
    #[serde(default)]
    provider_name: String,
}

impl ConnectionDescriptor {
    /// Creates a new descriptor.
    pub fn new(
        name: impl Into<String>,
        connection_string: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            connection_string: connection_string.into(),
            provider_name: provider_name.into(),
        }
    }

    /// Returns the name the connection is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw connection string.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Returns the provider name, which may be empty.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns `true` if the connection string is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.connection_string.trim().is_empty()
    }
}

// Connection strings routinely carry credentials, so only the name and provider are shown.
impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.provider_name.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.provider_name)
        }
    }
}
