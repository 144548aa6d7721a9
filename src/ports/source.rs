// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigurationSource` trait, the port through which the
//! accessor reads an already-populated settings mapping and connection registry.
//! How a source is populated (environment, files, a remote store) is up to the
//! implementation.

use crate::domain::ConnectionDescriptor;
use std::sync::Arc;

/// A read-only source of settings and named connections.
///
/// The accessor never mutates a source; it performs at most one lookup per
/// operation. Values are returned by reference and must remain owned by the source.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single source can serve concurrent
/// readers.
///
/// # Examples
///
/// ```rust
/// use appsettings::domain::ConnectionDescriptor;
/// use appsettings::ports::ConfigurationSource;
///
/// struct SingleSetting;
///
/// impl ConfigurationSource for SingleSetting {
///     fn name(&self) -> &str {
///         "single"
///     }
///
///     fn setting(&self, key: &str) -> Option<&str> {
///         (key == "Greeting").then_some("hello")
///     }
///
///     fn connection(&self, _name: &str) -> Option<&ConnectionDescriptor> {
///         None
///     }
///
///     fn setting_keys(&self) -> Vec<&str> {
///         vec!["Greeting"]
///     }
///
///     fn connection_names(&self) -> Vec<&str> {
///         vec![]
///     }
/// }
///
/// let source = SingleSetting;
/// assert_eq!(source.setting("Greeting"), Some("hello"));
/// assert_eq!(source.setting("Other"), None);
/// ```
pub trait ConfigurationSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging and debugging. It should be a short identifier
    /// like "env" or "memory".
    fn name(&self) -> &str;

    /// Looks up the raw value of a setting.
    ///
    /// Returns `None` if the key does not exist. Blank values are returned as stored;
    /// the accessor treats them the same as missing keys.
    fn setting(&self, key: &str) -> Option<&str>;

    /// Looks up a connection descriptor by name.
    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor>;

    /// Returns the keys of all settings in this source.
    fn setting_keys(&self) -> Vec<&str>;

    /// Returns the names of all connections in this source.
    fn connection_names(&self) -> Vec<&str>;
}

impl<S: ConfigurationSource + ?Sized> ConfigurationSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn setting(&self, key: &str) -> Option<&str> {
        (**self).setting(key)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        (**self).connection(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        (**self).setting_keys()
    }

    fn connection_names(&self) -> Vec<&str> {
        (**self).connection_names()
    }
}

impl<S: ConfigurationSource + ?Sized> ConfigurationSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn setting(&self, key: &str) -> Option<&str> {
        (**self).setting(key)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        (**self).connection(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        (**self).setting_keys()
    }

    fn connection_names(&self) -> Vec<&str> {
        (**self).connection_names()
    }
}

impl<S: ConfigurationSource + ?Sized> ConfigurationSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn setting(&self, key: &str) -> Option<&str> {
        (**self).setting(key)
    }

    fn connection(&self, name: &str) -> Option<&ConnectionDescriptor> {
        (**self).connection(name)
    }

    fn setting_keys(&self) -> Vec<&str> {
        (**self).setting_keys()
    }

    fn connection_names(&self) -> Vec<&str> {
        (**self).connection_names()
    }
}
