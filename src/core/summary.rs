//! Tabular dataset summarization
//!
//! Logs a dataset's shape and renders its head and descriptive statistics.
//! The dataset itself is an external collaborator: this module depends only
//! on the minimal [`TabularDataset`] capability interface, never on a
//! concrete tabular-data library.

use crate::error::{Result, SumstatsError};
use std::fmt;
use std::io;
use tracing::{info, instrument};

/// Number of leading rows rendered by [`summarize_data`]
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Minimal capability interface for a tabular dataset
///
/// Statistical computation belongs to the implementor; this crate only
/// routes the rendered views.
pub trait TabularDataset {
    /// Rendered view of rows or statistics
    type View: fmt::Display;

    /// Dataset extent as (rows, columns)
    fn shape(&self) -> (usize, usize);

    /// First `min(n, rows)` rows of the dataset
    fn head(&self, n: usize) -> Self::View;

    /// Descriptive statistics (count, mean, std, min, quartiles, max) for
    /// every numeric column
    fn describe(&self) -> Self::View;
}

/// Destination for rendered dataset views
pub trait DisplaySink {
    /// Render a single view to the sink
    fn render(&mut self, view: &dyn fmt::Display) -> Result<()>;
}

/// Display sink that writes each view to an underlying writer
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: io::Write> WriterSink<W> {
    /// Create a sink over the given writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> DisplaySink for WriterSink<W> {
    fn render(&mut self, view: &dyn fmt::Display) -> Result<()> {
        writeln!(self.writer, "{view}").map_err(|e| SumstatsError::render("dataset view", e))
    }
}

/// Summarize a tabular dataset
///
/// Produces three effects in order: logs an informational line with the
/// dataset's `(rows, cols)` shape, renders the first [`DEFAULT_HEAD_ROWS`]
/// rows, and renders the descriptive statistics.
#[instrument(skip(dataset, sink))]
pub fn summarize_data<D, S>(dataset: &D, sink: &mut S) -> Result<()>
where
    D: TabularDataset,
    S: DisplaySink,
{
    let (rows, cols) = dataset.shape();
    info!("Dataset shape: ({}, {})", rows, cols);

    sink.render(&dataset.head(DEFAULT_HEAD_ROWS))?;
    sink.render(&dataset.describe())?;

    Ok(())
}
