//! Rectangularity checks shared by the rotator and the factorizer.

use crate::core::error::MatrixError;

/// `(rows, cols)` of a rectangular, non-empty grid.
pub fn dims(matrix: &[Vec<f64>]) -> Result<(usize, usize), MatrixError> {
    let rows = matrix.len();
    if rows == 0 {
        return Err(MatrixError::shape("matrix has no rows"));
    }
    let cols = matrix[0].len();
    if cols == 0 {
        return Err(MatrixError::shape("matrix has no columns"));
    }
    if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(MatrixError::Shape(format!(
            "row {} has {} columns, expected {}",
            i,
            row.len(),
            cols
        )));
    }
    Ok((rows, cols))
}

/// Reject NaN and infinities, naming the first offending cell.
pub fn ensure_finite(matrix: &[Vec<f64>]) -> Result<(), MatrixError> {
    for (i, row) in matrix.iter().enumerate() {
        if let Some(j) = row.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite(format!(
                "non-finite value {} at ({}, {})",
                row[j], i, j
            )));
        }
    }
    Ok(())
}

pub fn flatten_row_major(matrix: &[Vec<f64>]) -> Vec<f64> {
    let cap = matrix.first().map_or(0, |r| r.len()) * matrix.len();
    let mut values = Vec::with_capacity(cap);
    for row in matrix {
        values.extend_from_slice(row);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_of_rectangle() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(dims(&m), Ok((2, 3)));
    }

    #[test]
    fn empty_and_ragged_are_shape_errors() {
        assert!(matches!(dims(&[]), Err(MatrixError::Shape(_))));
        assert!(matches!(dims(&[vec![]]), Err(MatrixError::Shape(_))));
        let ragged = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
        let err = dims(&ragged).unwrap_err();
        assert_eq!(err.to_string(), "Shape Error: row 1 has 3 columns, expected 2");
    }

    #[test]
    fn finite_check_names_cell() {
        let m = vec![vec![1.0, 2.0], vec![f64::INFINITY, f64::NAN]];
        let err = ensure_finite(&m).unwrap_err();
        assert_eq!(err.to_string(), "Value Error: non-finite value inf at (1, 0)");
        assert!(ensure_finite(&[vec![0.0, -1.5]]).is_ok());
    }

    #[test]
    fn flatten_keeps_row_order() {
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(flatten_row_major(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
