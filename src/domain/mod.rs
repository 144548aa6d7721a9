// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and rules.
//!
//! This module contains the error types, the connection descriptor, the textual
//! conversion rules, and the accessor trait. It is independent of any concrete
//! configuration source.

pub mod connection;
pub mod errors;
pub mod service;
pub mod setting_value;

// Re-export commonly used types
pub use connection::ConnectionDescriptor;
pub use errors::{ConfigError, ConversionError, Result};
pub use service::Configuration;
pub use setting_value::SettingValue;
