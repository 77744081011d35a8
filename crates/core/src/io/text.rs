//! Plain-text feature-matrix reading/writing
//!
//! One matrix row per line, values separated by whitespace. Blank lines and
//! lines starting with `#` are skipped. This matches the text dump produced
//! by the feature-extraction step.

use crate::error::{Error, Result};
use crate::features::FeatureMatrix;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a feature matrix from a text file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<FeatureMatrix> {
    let contents = fs::read_to_string(path.as_ref())?;
    read_matrix_from_str(&contents)
}

/// Parse a feature matrix from in-memory text.
///
/// All data lines must have the same number of values; ragged rows are
/// rejected with the offending line number.
pub fn read_matrix_from_str(contents: &str) -> Result<FeatureMatrix> {
    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    let mut cols = None;

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let start = values.len();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| Error::ParseMatrix {
                line: idx + 1,
                reason: format!("not a number: {token:?}"),
            })?;
            values.push(value);
        }

        let row_len = values.len() - start;
        match cols {
            None => cols = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(Error::ParseMatrix {
                    line: idx + 1,
                    reason: format!("expected {expected} values, got {row_len}"),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = cols.ok_or(Error::EmptyMatrix)?;
    FeatureMatrix::from_vec(values, rows, cols)
}

/// Write a feature matrix to a text file.
///
/// Values are written with full round-trip precision.
pub fn write_matrix<P: AsRef<Path>>(matrix: &FeatureMatrix, path: P) -> Result<()> {
    let mut file = fs::File::create(path.as_ref())?;
    let (rows, cols) = matrix.shape();
    writeln!(file, "# synical feature matrix: {rows} channels x {cols} frames")?;

    let data = matrix.data();
    for row in data.rows() {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{line}")?;
    }

    Ok(())
}
