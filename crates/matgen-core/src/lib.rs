//! matgen-core: random square matrix files for the matrix worker inputs.
//!
//! The crate samples N x N grids of uniformly distributed values, rounds them
//! to a fixed number of decimal digits and writes them as plain text, one row
//! per line with single-space separated tokens. A driver walks the fixed table
//! of input files (`A.txt`, `medA_300.txt`, `hugeB.txt`, ...) sequentially.
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod math;
