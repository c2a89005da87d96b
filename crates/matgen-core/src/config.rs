use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Inclusive bounds of the uniform distribution values are drawn from.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.ordered();
        value >= lo && value <= hi
    }

    /// Bounds as `(low, high)`, regardless of the order they were given in.
    pub fn ordered(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

/// One output file of the generation table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatrixSpec {
    pub file_name: String,
    pub size: usize,
}

impl MatrixSpec {
    pub fn new(file_name: &str, size: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            size,
        }
    }
}

/// The input files the matrix workers expect, as `(file name, N)`.
pub const DEFAULT_MATRICES: [(&str, usize); 12] = [
    ("A.txt", 4),
    ("B.txt", 4),
    ("medA.txt", 256),
    ("medB.txt", 256),
    ("medA_300.txt", 300),
    ("medB_300.txt", 300),
    ("bigA.txt", 1024),
    ("bigB.txt", 1024),
    ("bigA_512.txt", 512),
    ("bigB_512.txt", 512),
    ("hugeA.txt", 2048),
    ("hugeB.txt", 2048),
];

pub const DEFAULT_OUTPUT_DIR: &str = "input";
pub const DEFAULT_PRECISION: u32 = 2;

/// Settings for a full generation run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the files are written into. It must already exist.
    pub output_dir: PathBuf,
    pub range: ValueRange,
    /// Decimal digits kept after rounding.
    pub precision: u32,
    /// Seed for reproducible output. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
    pub matrices: Vec<MatrixSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            range: ValueRange::default(),
            precision: DEFAULT_PRECISION,
            seed: None,
            matrices: DEFAULT_MATRICES
                .iter()
                .map(|&(name, size)| MatrixSpec::new(name, size))
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn path_for(&self, spec: &MatrixSpec) -> PathBuf {
        self.output_dir.join(&spec.file_name)
    }
}

/// Load a generator configuration from a JSON file.
pub fn load_generator_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: GeneratorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_worker_inputs() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("input"));
        assert_eq!(cfg.range, ValueRange::new(0.0, 10.0));
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.seed, None);

        let sizes: Vec<usize> = cfg.matrices.iter().map(|m| m.size).collect();
        assert_eq!(
            sizes,
            vec![4, 4, 256, 256, 300, 300, 1024, 1024, 512, 512, 2048, 2048]
        );
        assert_eq!(cfg.matrices[5], MatrixSpec::new("medB_300.txt", 300));
        assert_eq!(
            cfg.path_for(&cfg.matrices[10]),
            PathBuf::from("input").join("hugeA.txt")
        );
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let cfg: GeneratorConfig =
            serde_json::from_str(r#"{ "output_dir": "out", "seed": 7 }"#).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.matrices.len(), 12);
        assert_eq!(cfg.range, ValueRange::default());
    }

    #[test]
    fn test_value_range_contains_reversed_bounds() {
        let range = ValueRange::new(10.0, 0.0);
        assert_eq!(range.ordered(), (0.0, 10.0));
        assert!(range.contains(0.0));
        assert!(range.contains(10.0));
        assert!(!range.contains(10.01));
    }

    #[test]
    fn test_load_generator_config_missing_file() {
        let err = load_generator_config("/nonexistent/matgen.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config"));
    }
}
