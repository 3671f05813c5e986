use std::fmt;
use std::str::FromStr;

use crate::trace_direction::TraceDirection;
use crate::AlignmentMatrixError;

/// Built-in output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixFormat {
    Ascii,
    Csv,
    Unicode,
    #[default]
    UnicodeArrows,
}

impl MatrixFormat {
    pub const ALL: [MatrixFormat; 4] = [
        MatrixFormat::Ascii,
        MatrixFormat::Csv,
        MatrixFormat::Unicode,
        MatrixFormat::UnicodeArrows,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatrixFormat::Ascii => "ascii",
            MatrixFormat::Csv => "csv",
            MatrixFormat::Unicode => "unicode",
            MatrixFormat::UnicodeArrows => "unicode-arrows",
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixFormat {
    type Err = AlignmentMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        MatrixFormat::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| AlignmentMatrixError::UnknownFormat(s.to_string()))
    }
}

// Indexed by TraceDirection bits.
const WORD_LABELS: [&str; 8] = ["N", "D", "U", "DU", "L", "DL", "UL", "DUL"];
const ARROWS: [&str; 8] = ["↺", "↖", "↑", "↖↑", "←", "↖←", "↑←", "↖↑←"];

/// Glyph table of one output encoding.
///
/// `trace_dir` is indexed by the raw [`TraceDirection`] bits, so entry 0 is
/// the glyph for `NONE` (origin / restart). An empty `row_sep` suppresses
/// separator lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    epsilon: String,
    col_sep: String,
    row_sep: String,
    row_col_sep: String,
    infinity: String,
    trace_dir: [String; 8],
}

impl SymbolSet {
    pub fn new(
        epsilon: &str,
        col_sep: &str,
        row_sep: &str,
        row_col_sep: &str,
        infinity: &str,
        trace_dir: [&str; 8],
    ) -> Self {
        Self {
            epsilon: epsilon.to_string(),
            col_sep: col_sep.to_string(),
            row_sep: row_sep.to_string(),
            row_col_sep: row_col_sep.to_string(),
            infinity: infinity.to_string(),
            trace_dir: trace_dir.map(|symbol| symbol.to_string()),
        }
    }

    pub fn preset(format: MatrixFormat) -> Self {
        match format {
            MatrixFormat::Ascii => Self::new(" ", "|", "-", "/", "INF", WORD_LABELS),
            MatrixFormat::Csv => Self::new(" ", ";", "", "", "INF", WORD_LABELS),
            MatrixFormat::Unicode => Self::new("ε", "║", "═", "╬", "∞", WORD_LABELS),
            MatrixFormat::UnicodeArrows => Self::new("ε", "║", "═", "╬", "∞", ARROWS),
        }
    }

    pub fn epsilon(&self) -> &str {
        &self.epsilon
    }

    pub fn col_sep(&self) -> &str {
        &self.col_sep
    }

    pub fn row_sep(&self) -> &str {
        &self.row_sep
    }

    pub fn row_col_sep(&self) -> &str {
        &self.row_col_sep
    }

    pub fn infinity(&self) -> &str {
        &self.infinity
    }

    /// Glyph for a trace cell. Unknown bit patterns and empty table entries
    /// are errors, never blank cells.
    pub fn trace_symbol(&self, dir: TraceDirection) -> Result<&str, AlignmentMatrixError> {
        dir.table_index()
            .map(|index| self.trace_dir[index].as_str())
            .filter(|symbol| !symbol.is_empty())
            .ok_or(AlignmentMatrixError::UnmappedDirection(dir))
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::preset(MatrixFormat::default())
    }
}

impl From<MatrixFormat> for SymbolSet {
    fn from(format: MatrixFormat) -> Self {
        Self::preset(format)
    }
}
