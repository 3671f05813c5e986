use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::matrix::{AlignmentMatrix, MatrixCell};
use crate::symbol_set::SymbolSet;
use crate::AlignmentMatrixError;

/// Predecessor flags of a trace matrix cell.
///
/// `NONE` marks the alignment origin or a local-alignment restart; any other
/// value is a non-empty subset of `DIAGONAL`, `UP` and `LEFT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraceDirection(u8);

impl TraceDirection {
    pub const NONE: Self = Self(0b000);
    pub const DIAGONAL: Self = Self(0b001);
    pub const UP: Self = Self(0b010);
    pub const LEFT: Self = Self(0b100);

    /// The eight documented combinations, in symbol-table order.
    pub const COMBINATIONS: [Self; 8] = [
        Self::NONE,
        Self::DIAGONAL,
        Self::UP,
        Self(0b011),
        Self::LEFT,
        Self(0b101),
        Self(0b110),
        Self(0b111),
    ];

    const ALL: u8 = 0b111;

    /// Any raw pattern is accepted; bits outside the three flags are kept
    /// and make the value unmapped for formatting.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Index into a symbol table, or `None` for patterns outside the
    /// documented combinations.
    pub fn table_index(self) -> Option<usize> {
        (self.0 & !Self::ALL == 0).then_some(self.0 as usize)
    }
}

impl BitOr for TraceDirection {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TraceDirection {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for TraceDirection {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for TraceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("NONE");
        }
        let mut names = Vec::new();
        for (flag, name) in [
            (Self::DIAGONAL, "DIAGONAL"),
            (Self::UP, "UP"),
            (Self::LEFT, "LEFT"),
        ] {
            if self.contains(flag) {
                names.push(name.to_string());
            }
        }
        let extra = self.0 & !Self::ALL;
        if extra != 0 {
            names.push(format!("{:#b}", extra));
        }
        f.write_str(&names.join("|"))
    }
}

impl MatrixCell for TraceDirection {
    const IS_TRACE: bool = true;

    fn symbol<'s>(&self, symbols: &'s SymbolSet) -> Result<Cow<'s, str>, AlignmentMatrixError> {
        symbols.trace_symbol(*self).map(Cow::Borrowed)
    }
}

/// Dense grid of trace directions, `(query + 1) x (database + 1)`.
pub type TraceMatrix = AlignmentMatrix<TraceDirection>;
