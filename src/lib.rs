//! Text rendering of pairwise alignment DP matrices.
//!
//! A [`ScoreMatrix`] or [`TraceMatrix`] produced by an aligner is bound to a
//! [`MatrixFormatter`], which lays it out as an ASCII, CSV or Unicode grid
//! with the query along the rows and the database along the columns.

use thiserror::Error;

pub mod config;
pub mod display_width;
pub mod formatter;
pub mod matrix;
pub mod scoring;
pub mod symbol_set;
pub mod trace_direction;

pub use config::FormatterConfig;
pub use display_width::{display_width, display_width_bytes};
pub use formatter::MatrixFormatter;
pub use matrix::{AlignmentMatrix, MatrixCell};
pub use scoring::{ScoreCell, ScoreMatrix, MATRIX_INF};
pub use symbol_set::{MatrixFormat, SymbolSet};
pub use trace_direction::{TraceDirection, TraceMatrix};

#[derive(Debug, Error)]
pub enum AlignmentMatrixError {
    #[error("{len} cells do not fill a {rows}x{cols} matrix")]
    DimensionMismatch { len: usize, rows: usize, cols: usize },
    #[error(
        "{rows}x{cols} matrix does not fit query of length {query_len} and database of length {database_len}"
    )]
    SequenceMismatch {
        rows: usize,
        cols: usize,
        query_len: usize,
        database_len: usize,
    },
    #[error("No symbol for trace direction {0:?}")]
    UnmappedDirection(TraceDirection),
    #[error("Column width {width} is too narrow for {symbol:?} ({needed} columns)")]
    ColumnTooNarrow {
        width: usize,
        symbol: String,
        needed: usize,
    },
    #[error("Unknown matrix format: {0}")]
    UnknownFormat(String),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
