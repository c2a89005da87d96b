//! Random matrix sampling and the sequential driver over the file table.
use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GeneratorConfig, ValueRange, DEFAULT_PRECISION};
use crate::error::GenerateError;
use crate::io::write_matrix;
use crate::math::Array2;

/// Round `value` to `precision` decimal digits, halves away from zero.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Summary of one written matrix file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMatrix {
    pub path: PathBuf,
    pub size: usize,
}

/// Draws square matrices of rounded uniform values.
#[derive(Debug, Clone, Copy)]
pub struct MatrixGenerator {
    range: ValueRange,
    precision: u32,
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::new(ValueRange::default(), DEFAULT_PRECISION)
    }
}

impl MatrixGenerator {
    pub fn new(range: ValueRange, precision: u32) -> Self {
        if range.min > range.max {
            log::warn!(
                "Value range [{}, {}] is reversed; sampling from [{}, {}]",
                range.min,
                range.max,
                range.max,
                range.min
            );
        }
        Self { range, precision }
    }

    fn distribution(&self) -> Result<Uniform<f64>, GenerateError> {
        let (lo, hi) = self.range.ordered();
        if !lo.is_finite() || !hi.is_finite() || !(hi - lo).is_finite() {
            return Err(GenerateError::NonFiniteRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(Uniform::new_inclusive(lo, hi))
    }

    /// Sample an `n x n` matrix, each entry drawn independently and rounded.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Array2<f64>, GenerateError> {
        let uniform = self.distribution()?;
        let precision = self.precision;
        Ok(Array2::square_from_fn(n, |_, _| {
            round_to(uniform.sample(&mut *rng), precision)
        }))
    }

    /// Sample an `n x n` matrix and write it to `path`, replacing any existing file.
    pub fn generate<P: AsRef<Path>, R: Rng + ?Sized>(
        &self,
        path: P,
        n: usize,
        rng: &mut R,
    ) -> Result<GeneratedMatrix> {
        let path = path.as_ref();
        let matrix = self.sample(n, rng)?;
        write_matrix(path, &matrix)?;
        log::debug!("Wrote {}x{} matrix to {}", n, n, path.display());

        Ok(GeneratedMatrix {
            path: path.to_path_buf(),
            size: n,
        })
    }
}

/// Write one `n x n` matrix of values from `[min_val, max_val]` to `path`,
/// drawing from the thread-local RNG.
pub fn generate_matrix_file<P: AsRef<Path>>(
    path: P,
    n: usize,
    min_val: f64,
    max_val: f64,
) -> Result<GeneratedMatrix> {
    MatrixGenerator::new(ValueRange::new(min_val, max_val), DEFAULT_PRECISION).generate(
        path,
        n,
        &mut rand::thread_rng(),
    )
}

/// [`generate_matrix_file`] over the default `[0.0, 10.0]` range.
pub fn generate_matrix_file_default<P: AsRef<Path>>(path: P, n: usize) -> Result<GeneratedMatrix> {
    let range = ValueRange::default();
    generate_matrix_file(path, n, range.min, range.max)
}

/// Generate every file of `config.matrices` in order, stopping at the first failure.
pub fn generate_all<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<GeneratedMatrix>> {
    let generator = MatrixGenerator::new(config.range, config.precision);
    let mut written = Vec::with_capacity(config.matrices.len());

    for spec in &config.matrices {
        let path = config.path_for(spec);
        written.push(generator.generate(&path, spec.size, rng)?);
    }

    log::info!(
        "Generated {} matrix files in {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(written)
}

/// Run a full generation pass, seeding the RNG when the config asks for it.
pub fn run(config: &GeneratorConfig) -> Result<Vec<GeneratedMatrix>> {
    match config.seed {
        Some(seed) => {
            log::debug!("Using seeded RNG (seed = {})", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            generate_all(config, &mut rng)
        }
        None => generate_all(config, &mut rand::thread_rng()),
    }
}
