//! Command implementations for the CLI

use crate::{config::Config, core::sum_numbers};
use tracing::{info, instrument};

/// Compute the sum of the configured numbers and log the result
#[instrument(skip(config))]
pub fn execute_sum(config: &Config) -> anyhow::Result<()> {
    let total: f64 = sum_numbers(config.numbers.iter().copied());

    info!("Sum of {:?} is {:?}", config.numbers, total);

    Ok(())
}
