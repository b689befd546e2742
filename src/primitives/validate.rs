//! Grid validation for matrix construction.
//!
//! Raw input is checked once, before a `Matrix` exists; arithmetic results
//! never pass through here. Row lengths are compared pairwise against the
//! *next* row (the last row against itself), so a ragged grid is reported at
//! the first differing boundary rather than against row 0.

use serde_json::Value;

use crate::error::{MatrizError, Result};

/// Checks that typed row data forms a non-empty rectangular grid.
pub(crate) fn validate_rows<T>(rows: &[Vec<T>]) -> Result<()> {
    if rows.is_empty() {
        return Err(MatrizError::dimension_mismatch(
            "at least one row",
            "0 rows",
        ));
    }

    for i in 0..rows.len() {
        if rows[i].is_empty() {
            return Err(MatrizError::dimension_mismatch(
                "at least one column",
                format!("0 columns in row {i}"),
            ));
        }

        let next = (i + 1).min(rows.len() - 1);
        if rows[i].len() != rows[next].len() {
            return Err(MatrizError::dimension_mismatch(
                format!("{} columns (row {i})", rows[i].len()),
                format!("{} columns (row {next})", rows[next].len()),
            ));
        }
    }

    Ok(())
}

/// Extracts a validated grid of numbers from an untyped JSON value.
///
/// This is where the full validation taxonomy lives: structural problems
/// (non-array root or row, empty root or row, ragged rows) report
/// [`MatrizError::DimensionMismatch`]; a cell that is a nested array, a
/// boolean, or any other non-number reports [`MatrizError::InvalidElement`]
/// with the offending value and its (row, col) position. The nested-array
/// check runs before the numeric check.
pub(crate) fn rows_from_value(value: &Value) -> Result<Vec<Vec<f64>>> {
    let outer = value
        .as_array()
        .ok_or_else(|| MatrizError::dimension_mismatch("an array of rows", kind_of(value)))?;

    if outer.is_empty() {
        return Err(MatrizError::dimension_mismatch(
            "at least one row",
            "0 rows",
        ));
    }

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(outer.len());

    for (i, row) in outer.iter().enumerate() {
        let cells = row
            .as_array()
            .ok_or_else(|| MatrizError::dimension_mismatch("an array of rows", kind_of(row)))?;

        if cells.is_empty() {
            return Err(MatrizError::dimension_mismatch(
                "at least one column",
                format!("0 columns in row {i}"),
            ));
        }

        let mut parsed = Vec::with_capacity(cells.len());
        for (j, cell) in cells.iter().enumerate() {
            if cell.is_array() {
                return Err(MatrizError::invalid_element(cell, i, j));
            }
            match cell {
                Value::Number(n) => match n.as_f64() {
                    Some(x) => parsed.push(x),
                    None => return Err(MatrizError::invalid_element(cell, i, j)),
                },
                _ => return Err(MatrizError::invalid_element(cell, i, j)),
            }
        }
        rows.push(parsed);

        // Pairwise adjacent-length check, against the next row's raw length.
        // A non-array next row is reported on its own visit.
        let next = (i + 1).min(outer.len() - 1);
        if let Some(next_cells) = outer[next].as_array() {
            if cells.len() != next_cells.len() {
                return Err(MatrizError::dimension_mismatch(
                    format!("{} columns (row {i})", cells.len()),
                    format!("{} columns (row {next})", next_cells.len()),
                ));
            }
        }
    }

    Ok(rows)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
