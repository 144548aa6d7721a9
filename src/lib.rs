// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, validated accessors over an application's settings.
//!
//! This crate is a read-only façade over an already-populated key/value settings
//! store and a registry of named connection strings. It resolves a setting by key,
//! optionally enforces its presence, and converts the raw text into a requested type,
//! falling back to caller-supplied defaults on absence or conversion failure.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`ConnectionDescriptor`, `SettingValue`,
//!   errors, and the `Configuration` accessor trait)
//! - **Ports**: The `ConfigurationSource` trait the accessor reads from
//! - **Adapters**: Implementations for specific sources (in-memory, env vars)
//! - **Service**: `Accessor`, the implementation of `Configuration`
//!
//! # Absence and Defaults
//!
//! A setting is absent when its key is missing or its value is empty or
//! whitespace-only. Required lookups fail on absence and on conversion failure;
//! optional lookups fall back to an empty string, a caller default, or the target
//! type's `Default` value.
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment variable source and `Accessor::from_env()` (default)
//! - `uuid`: Enable conversion to `uuid::Uuid` (default)
//! - `chrono`: Enable conversion to `chrono` date and time types (default)
//! - `humantime`: Enable conversion to `std::time::Duration` (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use appsettings::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let source = InMemorySource::new()
//!     .with_setting("Workers", "8")
//!     .with_setting("Verbose", "yes")
//!     .with_connection(ConnectionDescriptor::new("Main", "Host=db", "postgresql"));
//! let config = Accessor::new(source);
//!
//! let workers: usize = config.get_setting_as("Workers", true)?;
//! let verbose = config.get_setting_or_default_as("Verbose", false);
//! let region = config.get_setting_or_default("Region", "eu-west-1");
//! let main = config.get_connection("Main")?;
//!
//! assert_eq!(workers, 8);
//! assert!(verbose);
//! assert_eq!(region, "eu-west-1");
//! assert_eq!(main.provider_name(), "postgresql");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::InMemorySource;
    pub use crate::domain::{
        ConfigError, Configuration, ConnectionDescriptor, ConversionError, Result, SettingValue,
    };
    pub use crate::ports::ConfigurationSource;
    pub use crate::service::Accessor;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSource;
}
