use std::borrow::Cow;
use std::fmt;
use std::io;

use crate::config::FormatterConfig;
use crate::display_width::display_width;
use crate::matrix::{AlignmentMatrix, MatrixCell};
use crate::symbol_set::{MatrixFormat, SymbolSet};
use crate::AlignmentMatrixError;

/// Renders a score or trace matrix as a text grid.
///
/// The first line is a header: epsilon for column 0, then one database
/// character per column. Each following line is one matrix row, labelled
/// with epsilon (row 0) or the query character of that row. Unless the
/// symbol set has an empty row separator, a separator line is drawn after
/// the header and between matrix rows.
///
/// Cells are left-aligned and padded with spaces to the column width, and
/// every cell is closed by the column separator. Row labels are not padded.
pub struct MatrixFormatter<'m, T> {
    matrix: &'m AlignmentMatrix<T>,
    symbols: SymbolSet,
    column_width: Option<usize>,
    unmapped: Option<String>,
}

impl<'m, T: MatrixCell> MatrixFormatter<'m, T> {
    pub fn new(matrix: &'m AlignmentMatrix<T>) -> Self {
        log::debug!(
            "Binding {}x{} {} matrix",
            matrix.rows(),
            matrix.cols(),
            if T::IS_TRACE { "trace" } else { "score" }
        );
        Self {
            matrix,
            symbols: SymbolSet::default(),
            column_width: None,
            unmapped: None,
        }
    }

    pub fn from_config(matrix: &'m AlignmentMatrix<T>, config: &FormatterConfig) -> Self {
        let mut formatter = Self::new(matrix).with_format(config.format);
        formatter.column_width = config.column_width;
        formatter
    }

    pub fn with_format(mut self, format: MatrixFormat) -> Self {
        self.symbols = SymbolSet::preset(format);
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Glyph for trace cells the symbol set has no entry for. Without one,
    /// such cells are an error.
    pub fn with_unmapped_symbol(mut self, symbol: &str) -> Self {
        self.unmapped = Some(symbol.to_string());
        self
    }

    pub fn is_traceback_matrix(&self) -> bool {
        T::IS_TRACE
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Narrowest column width that fits every matrix cell (at least 1).
    ///
    /// Fails if a trace cell has no glyph in the symbol set.
    pub fn auto_width(&self) -> Result<usize, AlignmentMatrixError> {
        let mut width = 1;
        for cell in self.matrix.cells() {
            width = width.max(display_width(&self.cell_symbol(cell)?));
        }
        log::trace!("Auto column width {}", width);
        Ok(width)
    }

    /// Writes the grid for `query` (row labels) and `database` (column
    /// labels) to `out`.
    ///
    /// The matrix must be `(query.len() + 1) x (database.len() + 1)`. A
    /// `column_width` narrower than any padded cell is rejected rather than
    /// truncated. Both checks run before anything is written; the grid is
    /// then streamed to `out` cell by cell without buffering.
    pub fn format<W: io::Write>(
        &self,
        query: &[u8],
        database: &[u8],
        out: &mut W,
        column_width: usize,
    ) -> Result<(), AlignmentMatrixError> {
        let mut sink = IoSink { inner: out, error: None };
        match self.write_grid(Some((query, database)), &mut sink, column_width) {
            Err(AlignmentMatrixError::Fmt(e)) => Err(match sink.error.take() {
                Some(error) => AlignmentMatrixError::Io(error),
                None => AlignmentMatrixError::Fmt(e),
            }),
            result => result,
        }
    }

    pub fn format_to_string(
        &self,
        query: &[u8],
        database: &[u8],
        column_width: usize,
    ) -> Result<String, AlignmentMatrixError> {
        let mut text = String::new();
        self.write_grid(Some((query, database)), &mut text, column_width)?;
        Ok(text)
    }

    /// Formats with the configured column width, or [`auto_width`] if none
    /// was configured.
    ///
    /// [`auto_width`]: MatrixFormatter::auto_width
    pub fn render(&self, query: &[u8], database: &[u8]) -> Result<String, AlignmentMatrixError> {
        let width = match self.column_width {
            Some(width) => width,
            None => self.auto_width()?,
        };
        self.format_to_string(query, database, width)
    }

    // Without labels the header cells and row labels are blank, except for
    // the epsilon corner and row 0.
    fn write_grid<W: fmt::Write>(
        &self,
        labels: Option<(&[u8], &[u8])>,
        out: &mut W,
        width: usize,
    ) -> Result<(), AlignmentMatrixError> {
        let (rows, cols) = (self.matrix.rows(), self.matrix.cols());
        if let Some((query, database)) = labels {
            if rows != query.len() + 1 || cols != database.len() + 1 {
                return Err(AlignmentMatrixError::SequenceMismatch {
                    rows,
                    cols,
                    query_len: query.len(),
                    database_len: database.len(),
                });
            }
        }
        self.check_width(labels.map(|l| l.1), width)?;
        log::debug!(
            "Formatting {}x{} matrix, column width {}",
            rows,
            cols,
            width
        );

        let symbols = &self.symbols;
        let label = |sequence: Option<&[u8]>, index: usize| -> String {
            match sequence {
                Some(sequence) => char::from(sequence[index]).to_string(),
                None => " ".to_string(),
            }
        };

        out.write_char(' ')?;
        out.write_str(symbols.col_sep())?;
        for col in 0..cols {
            if col == 0 {
                self.write_cell(out, symbols.epsilon(), width)?;
            } else {
                self.write_cell(out, &label(labels.map(|l| l.1), col - 1), width)?;
            }
        }
        out.write_char('\n')?;

        for row in 0..rows {
            self.write_separator(out, width)?;
            if row == 0 {
                out.write_str(symbols.epsilon())?;
            } else {
                out.write_str(&label(labels.map(|l| l.0), row - 1))?;
            }
            out.write_str(symbols.col_sep())?;
            for cell in self.matrix.row(row).unwrap_or_default() {
                self.write_cell(out, &self.cell_symbol(*cell)?, width)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn cell_symbol(&self, cell: T) -> Result<Cow<'_, str>, AlignmentMatrixError> {
        match (cell.symbol(&self.symbols), &self.unmapped) {
            (Err(AlignmentMatrixError::UnmappedDirection(_)), Some(fallback)) => {
                Ok(Cow::Borrowed(fallback.as_str()))
            }
            (symbol, _) => symbol,
        }
    }

    // Finds the widest padded cell before anything is written, so a narrow
    // column never leaves a partial grid in the sink.
    fn check_width(&self, database: Option<&[u8]>, width: usize) -> Result<(), AlignmentMatrixError> {
        let epsilon = self.symbols.epsilon();
        let mut widest = (display_width(epsilon), Cow::Borrowed(epsilon));
        if self.matrix.cols() > 1 && widest.0 < 1 {
            let label = database.map_or(' ', |database| char::from(database[0]));
            widest = (1, Cow::Owned(label.to_string()));
        }
        for cell in self.matrix.cells() {
            let symbol = self.cell_symbol(cell)?;
            let needed = display_width(&symbol);
            if needed > widest.0 {
                widest = (needed, symbol);
            }
        }
        if widest.0 > width {
            return Err(AlignmentMatrixError::ColumnTooNarrow {
                width,
                symbol: widest.1.into_owned(),
                needed: widest.0,
            });
        }
        Ok(())
    }

    fn write_cell<W: fmt::Write>(
        &self,
        out: &mut W,
        symbol: &str,
        width: usize,
    ) -> Result<(), AlignmentMatrixError> {
        let needed = display_width(symbol);
        if needed > width {
            return Err(AlignmentMatrixError::ColumnTooNarrow {
                width,
                symbol: symbol.to_string(),
                needed,
            });
        }
        out.write_str(symbol)?;
        for _ in needed..width {
            out.write_char(' ')?;
        }
        out.write_str(self.symbols.col_sep())?;
        Ok(())
    }

    fn write_separator<W: fmt::Write>(&self, out: &mut W, width: usize) -> Result<(), AlignmentMatrixError> {
        let row_sep = self.symbols.row_sep();
        if row_sep.is_empty() {
            return Ok(());
        }
        out.write_char(' ')?;
        out.write_str(self.symbols.row_col_sep())?;
        for _ in 0..self.matrix.cols() {
            for _ in 0..width {
                out.write_str(row_sep)?;
            }
            out.write_str(self.symbols.row_col_sep())?;
        }
        out.write_char('\n')?;
        Ok(())
    }
}

/// Unlabelled grid in the default format at auto width.
impl<T: MatrixCell> fmt::Display for AlignmentMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatter = MatrixFormatter::new(self).with_unmapped_symbol("?");
        let width = formatter.auto_width().map_err(|_| fmt::Error)?;
        formatter
            .write_grid(None, f, width)
            .map_err(|_| fmt::Error)
    }
}

// Keeps the io error that a `fmt::Write` call can only report as `fmt::Error`.
struct IoSink<'a, W> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
