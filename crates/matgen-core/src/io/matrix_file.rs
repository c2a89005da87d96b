//! Plain-text matrix files: one row per line, values separated by a single space.
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::GenerateError;
use crate::math::Array2;

/// Render a value with the shortest decimal form that round-trips, keeping at
/// least one fractional digit (`7.0`, `3.1`, `3.14`).
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Write `matrix` to `path`, truncating any existing file.
///
/// The parent directory is not created; a missing directory surfaces as an
/// I/O error carrying the path.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Array2<f64>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("Failed to create matrix file: {}", path.display()))?;

    for (row_idx, row) in matrix.rows().enumerate() {
        writer
            .write_record(row.iter().map(|&v| format_value(v)))
            .with_context(|| format!("Failed to write row {} of {}", row_idx + 1, path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush matrix file: {}", path.display()))?;
    Ok(())
}

/// Read an `n x n` matrix file back into memory.
///
/// Every row must hold exactly `n` values and the file exactly `n` rows.
pub fn read_matrix<P: AsRef<Path>>(path: P, n: usize) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut data = Vec::with_capacity(n * n);
    let mut rows = 0;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        if record.len() != n {
            return Err(GenerateError::RaggedRow {
                row: row_idx + 1,
                expected: n,
                found: record.len(),
            }
            .into());
        }

        for field in record.iter() {
            let value = field
                .parse::<f64>()
                .with_context(|| format!("Invalid value '{}' at row {}", field, row_idx + 1))?;
            data.push(value);
        }
        rows += 1;
    }

    if rows != n {
        return Err(GenerateError::RowCount {
            expected: n,
            found: rows,
        }
        .into());
    }

    Ok(Array2::from_shape_vec((n, n), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_keeps_one_fractional_digit() {
        assert_eq!(format_value(7.0), "7.0");
        assert_eq!(format_value(10.0), "10.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(3.1), "3.1");
        assert_eq!(format_value(3.14), "3.14");
        assert_eq!(format_value(0.05), "0.05");
        assert_eq!(format_value(-2.5), "-2.5");
    }

    #[test]
    fn test_write_matrix_text_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 2.5, 3.25, 10.0]).unwrap();

        write_matrix(&path, &m).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1.0 2.5\n3.25 10.0\n");
        assert_eq!(read_matrix(&path, 2).unwrap(), m);
    }

    #[test]
    fn test_write_matrix_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        std::fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        let m = Array2::from_shape_vec((1, 1), vec![4.2]).unwrap();
        write_matrix(&path, &m).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "4.2\n");
    }

    #[test]
    fn test_write_matrix_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("m.txt");
        let m = Array2::from_shape_vec((1, 1), vec![1.0]).unwrap();

        let err = write_matrix(&path, &m).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create matrix file"));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_matrix_ragged_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.txt");
        std::fs::write(&path, "1.0 2.0\n3.0\n").unwrap();

        let err = read_matrix(&path, 2).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_read_matrix_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.txt");
        std::fs::write(&path, "1.0 2.0\n").unwrap();

        let err = read_matrix(&path, 2).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::RowCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_read_matrix_invalid_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "1.0 abc\n").unwrap();

        let err = read_matrix(&path, 2).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid value 'abc' at row 1"));
    }

    #[test]
    fn test_read_empty_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::File::create(&path).unwrap();

        let m = read_matrix(&path, 0).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }
}
