//! # sumstats
//!
//! Small, stateless utilities: two command-line tools that sum numbers, and a
//! dataset summarizer for tabular data supplied by a host environment.
//!
//! ## Features
//!
//! - Generic additive reduction over any numeric sequence
//! - Strictly validated float-summing CLI with logged results
//! - Bare integer-summing CLI that prints the raw total
//! - Dataset summaries (shape, head, describe) behind a minimal trait
//!
//! ## Example
//!
//! ```
//! use sumstats::core::sum_numbers;
//!
//! let total: f64 = sum_numbers([1.5, 2.5]);
//! assert_eq!(total, 4.0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
