// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings accessor trait definition.
//!
//! This module defines the `Configuration` trait, which is the main interface callers
//! use to read settings and connections. Code that depends on configuration should
//! accept `impl Configuration` so that tests can substitute their own implementation.

use crate::domain::{ConnectionDescriptor, ConversionError, Result, SettingValue};

/// The typed settings accessor.
///
/// Settings are considered absent when the key is missing or its value is empty or
/// whitespace-only. Required operations fail on absence; the `_or_default` operations
/// never fail.
///
/// # Examples
///
/// ```rust
/// use appsettings::adapters::InMemorySource;
/// use appsettings::domain::Configuration;
/// use appsettings::service::Accessor;
///
/// # fn main() -> appsettings::domain::Result<()> {
/// let source = InMemorySource::new()
///     .with_setting("MaxRetries", "5")
///     .with_setting("Banner", "Welcome");
/// let config = Accessor::new(source);
///
/// let retries: u32 = config.get_setting_as("MaxRetries", true)?;
/// assert_eq!(retries, 5);
/// assert_eq!(config.get_setting("Banner", true)?, "Welcome");
/// assert_eq!(config.get_setting_or_default("Theme", "dark"), "dark");
/// # Ok(())
/// # }
/// ```
pub trait Configuration {
    /// Retrieves the raw value of a setting.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - The raw, untrimmed value when present
    /// * `Ok("")` - The setting is absent and `required` is `false`
    /// * `Err(ConfigError::MissingRequiredSetting)` - The setting is absent and
    ///   `required` is `true`
    fn get_setting(&self, key: &str, required: bool) -> Result<String>;

    /// Retrieves the raw value of a setting, or `default_value` when it is absent.
    fn get_setting_or_default(&self, key: &str, default_value: &str) -> String {
        self.get_setting_or_default_as(key, default_value.to_string())
    }

    /// Retrieves a setting converted to `T`.
    ///
    /// Absence is handled as in [`get_setting`](Configuration::get_setting). A value that
    /// fails to convert yields `ConfigError::InvalidSetting` when `required` is `true`
    /// and `T::default()` otherwise. Absent optional settings also yield `T::default()`.
    fn get_setting_as<T>(&self, key: &str, required: bool) -> Result<T>
    where
        T: SettingValue + Default,
    {
        self.get_setting_as_with(key, required, T::parse_setting)
    }

    /// Like [`get_setting_as`](Configuration::get_setting_as), but converts with the
    /// given function instead of `T`'s [`SettingValue`] implementation.
    fn get_setting_as_with<T, F>(&self, key: &str, required: bool, converter: F) -> Result<T>
    where
        T: Default,
        F: Fn(&str) -> std::result::Result<T, ConversionError>;

    /// Retrieves a setting converted to `T`, or `default_value` when the setting is
    /// absent or fails to convert.
    fn get_setting_or_default_as<T>(&self, key: &str, default_value: T) -> T
    where
        T: SettingValue,
    {
        self.get_setting_or_default_as_with(key, default_value, T::parse_setting)
    }

    /// Like [`get_setting_or_default_as`](Configuration::get_setting_or_default_as), but
    /// converts with the given function.
    fn get_setting_or_default_as_with<T, F>(&self, key: &str, default_value: T, converter: F) -> T
    where
        F: Fn(&str) -> std::result::Result<T, ConversionError>;

    /// Checks whether a setting is present with a non-blank value.
    fn has_setting(&self, key: &str) -> bool {
        self.get_setting(key, true).is_ok()
    }

    /// Retrieves a named connection.
    ///
    /// # Returns
    ///
    /// * `Ok(descriptor)` - The descriptor, unchanged
    /// * `Err(ConfigError::MissingRequiredConnection)` - No connection has that name
    /// * `Err(ConfigError::EmptyRequiredConnection)` - The connection string is blank
    fn get_connection(&self, name: &str) -> Result<&ConnectionDescriptor>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    // Minimal implementation that exercises the provided methods
    struct FixedConfiguration {
        value: Option<&'static str>,
        connection: ConnectionDescriptor,
    }

    impl Configuration for FixedConfiguration {
        fn get_setting(&self, key: &str, required: bool) -> Result<String> {
            match self.value {
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
            match self.value {
                Some(value) => converter(value).map_err(|source| ConfigError::InvalidSetting {
                    key: key.to_string(),
                    value: value.to_string(),
                    target_type: source.target_type().to_string(),
                    source,
                }),
                None => self.get_setting(key, required).map(|_| T::default()),
            }
        }

        fn get_setting_or_default_as_with<T, F>(
            &self,
            _key: &str,
            default_value: T,
            converter: F,
        ) -> T
        where
            F: Fn(&str) -> std::result::Result<T, ConversionError>,
        {
            self.value
                .and_then(|value| converter(value).ok())
                .unwrap_or(default_value)
        }

        fn get_connection(&self, _name: &str) -> Result<&ConnectionDescriptor> {
            Ok(&self.connection)
        }
    }

    fn fixed(value: Option<&'static str>) -> FixedConfiguration {
        FixedConfiguration {
            value,
            connection: ConnectionDescriptor::new("C1", "X", "P"),
        }
    }

    #[test]
    fn test_provided_get_setting_as() {
        let config = fixed(Some("12"));
        let value: i32 = config.get_setting_as("key", true).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_provided_get_setting_or_default() {
        assert_eq!(fixed(Some("abc")).get_setting_or_default("key", "d"), "abc");
        assert_eq!(fixed(None).get_setting_or_default("key", "d"), "d");
    }

    #[test]
    fn test_provided_get_setting_or_default_as() {
        assert_eq!(fixed(Some("abc")).get_setting_or_default_as("key", 3u8), 3);
        assert_eq!(fixed(Some("7")).get_setting_or_default_as("key", 3u8), 7);
    }

    #[test]
    fn test_provided_has_setting() {
        assert!(fixed(Some("x")).has_setting("key"));
        assert!(!fixed(None).has_setting("key"));
    }

    #[test]
    fn test_get_connection() {
        let config = fixed(None);
        assert_eq!(config.get_connection("C1").unwrap().name(), "C1");
    }
}
