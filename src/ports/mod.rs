// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait the accessor consumes to read settings and
//! connections. Adapters in the adapters layer implement it.

pub mod source;

// Re-export commonly used types
pub use source::ConfigurationSource;
