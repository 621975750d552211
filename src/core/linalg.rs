#![allow(clippy::needless_range_loop)]
//! Small dense helpers on plain row-major grids.

use crate::core::error::MatrixError;
use crate::core::shape;

pub fn matrix_multiply(m1: &[Vec<f64>], m2: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MatrixError> {
    let (result_rows, m1_cols) = shape::dims(m1)?;
    let (m2_rows, result_cols) = shape::dims(m2)?;
    if m1_cols != m2_rows {
        return Err(MatrixError::Shape(format!(
            "cannot multiply {result_rows}x{m1_cols} by {m2_rows}x{result_cols}"
        )));
    }

    let mut result = vec![vec![0.0; result_cols]; result_rows];
    for i in 0..result_rows {
        for j in 0..result_cols {
            result[i][j] = (0..m1_cols).map(|k| m1[i][k] * m2[k][j]).sum();
        }
    }
    Ok(result)
}

pub fn transpose(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MatrixError> {
    let (rows, cols) = shape::dims(matrix)?;

    let mut transposed = vec![vec![0.0; rows]; cols];
    for i in 0..rows {
        for j in 0..cols {
            transposed[j][i] = matrix[i][j];
        }
    }
    Ok(transposed)
}

pub fn identity_matrix(size: usize) -> Vec<Vec<f64>> {
    let mut identity = vec![vec![0.0; size]; size];
    for i in 0..size {
        identity[i][i] = 1.0;
    }
    identity
}

/// Largest absolute cell difference; NaN if any compared cell is NaN.
pub fn max_abs_diff(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<f64, MatrixError> {
    let da = shape::dims(a)?;
    let db = shape::dims(b)?;
    if da != db {
        return Err(MatrixError::Shape(format!(
            "cannot compare {}x{} with {}x{}",
            da.0, da.1, db.0, db.1
        )));
    }
    let mut worst = 0.0_f64;
    for (ra, rb) in a.iter().zip(b) {
        for (x, y) in ra.iter().zip(rb) {
            let d = (x - y).abs();
            if d.is_nan() {
                return Ok(f64::NAN);
            }
            worst = worst.max(d);
        }
    }
    Ok(worst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_rectangular() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let b = vec![vec![1.0], vec![0.0], vec![-1.0]];
        assert_eq!(matrix_multiply(&a, &b).unwrap(), vec![vec![-2.0], vec![-2.0]]);
    }

    #[test]
    fn multiply_rejects_mismatch() {
        let a = vec![vec![1.0, 2.0]];
        let err = matrix_multiply(&a, &a).unwrap_err();
        assert_eq!(err.to_string(), "Shape Error: cannot multiply 1x2 by 1x2");
    }

    #[test]
    fn transpose_swaps_dims() {
        let a = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(transpose(&a).unwrap(), vec![vec![1.0], vec![2.0], vec![3.0]]);
    }

    #[test]
    fn diff_against_identity() {
        let id = identity_matrix(2);
        let near = vec![vec![1.0, 0.25], vec![0.0, 1.0]];
        assert_eq!(max_abs_diff(&id, &near).unwrap(), 0.25);
        assert!(max_abs_diff(&id, &[vec![f64::NAN, 0.0], vec![0.0, 1.0]]).unwrap().is_nan());
    }
}
