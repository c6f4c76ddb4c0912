//! Core functionality for the sumstats tools
//!
//! Contains the additive reduction shared by both command-line tools and the
//! dataset summarizer.

pub mod sum;
pub mod summary;

pub use sum::sum_numbers;
pub use summary::{DEFAULT_HEAD_ROWS, DisplaySink, TabularDataset, WriterSink, summarize_data};
