// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the accessor implementation.
//!
//! This module contains the concrete implementation of the `Configuration` trait,
//! which resolves, validates and converts values read from a configuration source.

pub mod accessor;

// Re-export commonly used types
pub use accessor::Accessor;
