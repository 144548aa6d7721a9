// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the settings accessor.
//!
//! This example demonstrates:
//! - Creating an accessor over environment variables
//! - Required and optional settings
//! - Type conversions (int, bool, duration) with defaults
//! - Looking up a named connection string
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export APP_NAME="MyApplication"
//! export APP_WORKERS="8"
//! export APP_VERBOSE="yes"
//! export APP_TIMEOUT="45s"
//! export POSTGRESQLCONNSTR_Main="Host=localhost;Database=app"
//!
//! # Run the example
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use appsettings::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Settings Accessor: Basic Usage ===\n");

    let config = Accessor::new(EnvVarSource::with_prefix("APP_"));

    // Example 1: Required string value
    println!("--- Example 1: Required Values ---");
    match config.get_setting("NAME", true) {
        Ok(name) => println!("✓ APP_NAME found: {}", name),
        Err(e) => println!("✗ {}", e),
    }

    // Example 2: Typed values with defaults
    println!("\n--- Example 2: Typed Values ---");
    let workers = config.get_setting_or_default_as("WORKERS", 4usize);
    let verbose = config.get_setting_or_default_as("VERBOSE", false);
    let timeout = config.get_setting_or_default_as("TIMEOUT", Duration::from_secs(30));
    println!("  workers = {}", workers);
    println!("  verbose = {}", verbose);
    println!("  timeout = {:?}", timeout);

    // Example 3: Optional values fall back to the type's default
    println!("\n--- Example 3: Optional Values ---");
    let retries: u32 = config.get_setting_as("RETRIES", false)?;
    println!("  retries = {} (0 when unset or invalid)", retries);
    println!(
        "  region = {}",
        config.get_setting_or_default("REGION", "eu-west-1")
    );

    // Example 4: Connection strings
    println!("\n--- Example 4: Connections ---");
    match config.get_connection("Main") {
        Ok(conn) => println!("✓ connection {} found", conn),
        Err(e) => println!("✗ {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
