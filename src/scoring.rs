use std::borrow::Cow;

use crate::matrix::{AlignmentMatrix, MatrixCell};
use crate::symbol_set::SymbolSet;
use crate::AlignmentMatrixError;

/// Score standing for negative infinity / an unreachable cell.
pub const MATRIX_INF: i32 = i32::MIN;

/// Dense grid of alignment scores, `(query + 1) x (database + 1)`.
pub type ScoreMatrix = AlignmentMatrix<i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCell {
    Value(i32),
    Infinity,
}

impl From<i32> for ScoreCell {
    fn from(score: i32) -> Self {
        if score == MATRIX_INF {
            ScoreCell::Infinity
        } else {
            ScoreCell::Value(score)
        }
    }
}

impl ScoreCell {
    pub fn is_infinite(self) -> bool {
        self == ScoreCell::Infinity
    }
}

impl AlignmentMatrix<i32> {
    pub fn score(&self, row: usize, col: usize) -> Option<ScoreCell> {
        self.get(row, col).map(ScoreCell::from)
    }
}

impl MatrixCell for i32 {
    const IS_TRACE: bool = false;

    fn symbol<'s>(&self, symbols: &'s SymbolSet) -> Result<Cow<'s, str>, AlignmentMatrixError> {
        Ok(match ScoreCell::from(*self) {
            ScoreCell::Value(score) => Cow::Owned(score.to_string()),
            ScoreCell::Infinity => Cow::Borrowed(symbols.infinity()),
        })
    }
}
