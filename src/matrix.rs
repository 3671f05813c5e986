use std::borrow::Cow;

use crate::symbol_set::SymbolSet;
use crate::AlignmentMatrixError;

/// Glyph lookup for one cell type of an [`AlignmentMatrix`].
pub trait MatrixCell: Copy {
    /// Whether a matrix of this cell type is a traceback matrix.
    const IS_TRACE: bool;

    fn symbol<'s>(&self, symbols: &'s SymbolSet) -> Result<Cow<'s, str>, AlignmentMatrixError>;
}

/// Immutable row-major DP grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> AlignmentMatrix<T> {
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, AlignmentMatrixError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(AlignmentMatrixError::DimensionMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }
}
