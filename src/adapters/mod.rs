// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains concrete implementations of the `ConfigurationSource` trait
//! defined in the ports layer.

#[cfg(feature = "env")]
pub mod env_var;
pub mod in_memory;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarSource;
pub use in_memory::InMemorySource;
