//! Configuration management for the sumstats tools
//!
//! Centralizes runtime options assembled from the CLI and provides validation.

use crate::{cli::Args, error::SumstatsError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Numbers to sum
    pub numbers: Vec<f64>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SumstatsError> {
        let config = Self {
            debug: args.debug,
            numbers: args.numbers.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SumstatsError> {
        if self.numbers.is_empty() {
            return Err(SumstatsError::validation(
                "at least one number is required",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_copies_numbers() {
        let args = Args {
            debug: true,
            numbers: vec![1.0, 2.0],
        };

        let config = Config::from_args(&args).unwrap();
        assert!(config.debug);
        assert_eq!(config.numbers, vec![1.0, 2.0]);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config {
            debug: true,
            numbers: vec![1.5, 2.5],
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.debug, config.debug);
        assert_eq!(restored.numbers, config.numbers);
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SumstatsError::Validation { .. }));
    }
}
