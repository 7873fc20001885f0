//! Input parsing and output writing.
//!
//! File format (input): two integers `N D`, then N*D whitespace-
//! separated floating-point values in row-major order. Any whitespace
//! (spaces, newlines, tabs) separates tokens.
//!
//! Outputs: one cluster index per line for assignments; K rows of D
//! values at fixed 3-decimal precision for medoids.

use std::fs;
use std::path::Path;

use kmedoids_core::Dataset;

use crate::error::{CliError, CliResult};

/// Parse a point file into a validated [`Dataset`].
///
/// # Errors
///
/// Returns a [`CliError`] for an unreadable file, a missing header,
/// non-numeric tokens, or fewer coordinates than the header promises.
/// Shape and finiteness checks come from [`Dataset::new`].
pub fn read_dataset(path: &Path) -> CliResult<Dataset> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let mut tokens = contents.split_whitespace();

    let num_points = next_count(&mut tokens, path, "point count")?;
    let num_dims = next_count(&mut tokens, path, "dimensionality")?;

    let expected = num_points * num_dims;
    let mut coords = Vec::with_capacity(expected);
    for token in tokens.take(expected) {
        let value: f32 = token.parse().map_err(|_| CliError::InvalidToken {
            path: path.to_path_buf(),
            token: token.to_string(),
            expected: "floating-point coordinate",
        })?;
        coords.push(value);
    }

    if coords.len() != expected {
        return Err(CliError::TruncatedData {
            path: path.to_path_buf(),
            expected,
            actual: coords.len(),
        });
    }

    Ok(Dataset::new(coords, num_points, num_dims)?)
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    expected: &'static str,
) -> CliResult<usize> {
    let token = tokens.next().ok_or_else(|| CliError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    token.parse().map_err(|_| CliError::InvalidToken {
        path: path.to_path_buf(),
        token: token.to_string(),
        expected,
    })
}

/// Write the final assignment vector, one cluster index per line.
pub fn write_assignments(path: &Path, assignments: &[usize]) -> CliResult<()> {
    let mut out = String::with_capacity(assignments.len() * 2);
    for &cluster in assignments {
        out.push_str(&cluster.to_string());
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| CliError::io(path, e))
}

/// Write medoid rows at fixed 3-decimal precision, one medoid per line.
///
/// Each value is followed by a single space, matching the assignment
/// file's sibling format.
pub fn write_medoids<'a>(path: &Path, rows: impl Iterator<Item = &'a [f32]>) -> CliResult<()> {
    let mut out = String::new();
    for row in rows {
        for value in row {
            out.push_str(&format!("{value:.3} "));
        }
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| CliError::io(path, e))
}
