use std::error::Error;
use std::fmt;

/// Failures raised while generating or reading back matrix files.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Sampling bounds must be finite numbers.
    NonFiniteRange { min: f64, max: f64 },
    /// A row in a matrix file had the wrong number of tokens (1-based row).
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    RowCount { expected: usize, found: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::NonFiniteRange { min, max } => {
                write!(f, "Value range [{}, {}] must have finite bounds", min, max)
            }
            GenerateError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} values, expected {}",
                row, found, expected
            ),
            GenerateError::RowCount { expected, found } => {
                write!(f, "Matrix file has {} rows, expected {}", found, expected)
            }
        }
    }
}

impl Error for GenerateError {}
