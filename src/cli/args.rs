//! Command-line argument parsing and validation

use clap::Parser;

/// Sum numbers from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "sumnum")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Numbers to sum
    #[arg(value_name = "N", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub numbers: Vec<f64>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
