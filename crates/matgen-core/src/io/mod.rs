pub mod matrix_file;

pub use matrix_file::{read_matrix, write_matrix};
