//! Seam between the factorizer and the dense linear-algebra library.
//!
//! The factorizer only sees `QrBackend` + `DenseMatrix`; swapping nalgebra
//! for another library means adding one impl here.

use nalgebra::DMatrix;

use crate::core::error::MatrixError;

/// Read-only view over a dense factor returned by a backend.
pub trait DenseMatrix {
    fn dims(&self) -> (usize, usize);
    fn at(&self, i: usize, j: usize) -> f64;
}

impl DenseMatrix for DMatrix<f64> {
    fn dims(&self) -> (usize, usize) {
        self.shape()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

/// QR factorization over a flat row-major buffer.
pub trait QrBackend {
    type Factor: DenseMatrix;

    fn name(&self) -> &'static str;

    /// Returns `(Q, R)` for the `rows`×`cols` matrix stored in `values`.
    fn factorize(
        &self,
        values: &[f64],
        rows: usize,
        cols: usize,
    ) -> Result<(Self::Factor, Self::Factor), MatrixError>;
}

/// Householder QR from nalgebra, thin mode: Q is rows×k, R is k×cols, k = min(rows, cols).
#[derive(Debug, Default, Copy, Clone)]
pub struct NalgebraQr;

impl QrBackend for NalgebraQr {
    type Factor = DMatrix<f64>;

    fn name(&self) -> &'static str {
        "nalgebra-householder"
    }

    fn factorize(
        &self,
        values: &[f64],
        rows: usize,
        cols: usize,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>), MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Factorization(format!(
                "cannot factorize a {rows}x{cols} matrix"
            )));
        }
        if values.len() != rows * cols {
            return Err(MatrixError::Factorization(format!(
                "buffer holds {} values, {rows}x{cols} needs {}",
                values.len(),
                rows * cols
            )));
        }
        let qr = DMatrix::from_row_slice(rows, cols, values).qr();
        Ok((qr.q(), qr.r()))
    }
}

/// Copy a dense factor into a row-major grid, bounded by the factor's own dims.
pub fn to_grid<M: DenseMatrix + ?Sized>(m: &M) -> Vec<Vec<f64>> {
    let (r, c) = m.dims();
    let mut grid = Vec::with_capacity(r);
    for i in 0..r {
        let mut row = Vec::with_capacity(c);
        for j in 0..c {
            row.push(m.at(i, j));
        }
        grid.push(row);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_slice_is_row_major() {
        let (q, r) = NalgebraQr.factorize(&[3.0, 0.0, 0.0, 2.0], 2, 2).unwrap();
        assert_eq!(q.dims(), (2, 2));
        assert_eq!(r.dims(), (2, 2));
        // diagonal input: R keeps magnitudes on the diagonal
        assert!((r.at(0, 0).abs() - 3.0).abs() < 1e-12);
        assert!((r.at(1, 1).abs() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn thin_factors_for_tall_input() {
        let vals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 11.0];
        let (q, r) = NalgebraQr.factorize(&vals, 5, 2).unwrap();
        assert_eq!(q.dims(), (5, 2));
        assert_eq!(r.dims(), (2, 2));
        assert_eq!(to_grid(&q).len(), 5);
        assert_eq!(to_grid(&r)[0].len(), 2);
    }

    #[test]
    fn bad_buffer_is_factorization_error() {
        let err = NalgebraQr.factorize(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(err.kind(), "factorization");
    }
}
