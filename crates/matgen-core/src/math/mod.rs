//! Small dense matrix container used by the generator and the file reader.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
