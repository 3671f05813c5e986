use crate::symbol_set::MatrixFormat;
use crate::AlignmentMatrixError;

pub const FORMAT_ENV: &str = "ALIGNMENT_MATRIX_FORMAT";
pub const WIDTH_ENV: &str = "ALIGNMENT_MATRIX_WIDTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatterConfig {
    pub format: MatrixFormat,
    /// `None` renders at the formatter's auto width.
    pub column_width: Option<usize>,
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: MatrixFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_column_width(mut self, width: usize) -> Result<Self, AlignmentMatrixError> {
        if width == 0 {
            return Err(AlignmentMatrixError::ConfigError(
                "column width must be at least 1".to_string(),
            ));
        }
        self.column_width = Some(width);
        Ok(self)
    }

    /// Defaults overridden by `ALIGNMENT_MATRIX_FORMAT` and
    /// `ALIGNMENT_MATRIX_WIDTH`.
    pub fn from_env() -> Result<Self, AlignmentMatrixError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AlignmentMatrixError> {
        let mut config = Self::default();
        if let Some(format) = lookup(FORMAT_ENV) {
            config = config.with_format(format.parse()?);
            log::debug!("{}={}: using {} format", FORMAT_ENV, format, config.format);
        }
        if let Some(width) = lookup(WIDTH_ENV) {
            let width = width.trim().parse::<usize>().map_err(|e| {
                AlignmentMatrixError::ConfigError(format!("{}={:?}: {}", WIDTH_ENV, width, e))
            })?;
            config = config.with_column_width(width)?;
            log::debug!("{}={}: fixed column width", WIDTH_ENV, width);
        }
        Ok(config)
    }
}
