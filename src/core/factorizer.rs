//! QR factorization contract: shape validation, backend call, grid extraction.
//!
//! Mode is reduced (thin): for an R×C input with k = min(R, C), Q is R×k and
//! R is k×C. R's diagonal is non-negative.
//!
//! Finite input is rescaled by a power of two before reaching the backend and
//! R is scaled back afterwards. Finite input that still yields a non-finite
//! factor is a `MatrixError::Factorization`.

use serde::{Deserialize, Serialize};

use crate::core::backend::{to_grid, DenseMatrix, NalgebraQr, QrBackend};
use crate::core::error::MatrixError;
use crate::core::linalg;
use crate::core::shape;

/// What to do with NaN/±Inf cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Hand them to the backend; factors come back shape-valid but degenerate.
    #[default]
    Propagate,
    /// Fail with `MatrixError::NonFinite` before the backend runs.
    Reject,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FactorizeOptions {
    pub non_finite: NonFinitePolicy,
}

impl FactorizeOptions {
    pub fn rejecting_non_finite() -> Self {
        Self { non_finite: NonFinitePolicy::Reject }
    }
}

/// Orthogonal factor `q` and upper-triangular factor `r` as plain grids.
#[derive(Clone, Debug, PartialEq)]
pub struct QrResult {
    pub q: Vec<Vec<f64>>,
    pub r: Vec<Vec<f64>>,
}

impl QrResult {
    /// Q·R.
    pub fn reconstruct(&self) -> Result<Vec<Vec<f64>>, MatrixError> {
        linalg::matrix_multiply(&self.q, &self.r)
    }

    /// max |(Q·R)[i][j] - original[i][j]|.
    pub fn reconstruction_error(&self, original: &[Vec<f64>]) -> Result<f64, MatrixError> {
        linalg::max_abs_diff(&self.reconstruct()?, original)
    }

    /// max |(QᵗQ - I)[i][j]|; zero for exactly orthonormal columns.
    pub fn orthogonality_error(&self) -> Result<f64, MatrixError> {
        let qtq = linalg::matrix_multiply(&linalg::transpose(&self.q)?, &self.q)?;
        linalg::max_abs_diff(&qtq, &linalg::identity_matrix(qtq.len()))
    }

    pub fn is_upper_triangular(&self, tol: f64) -> bool {
        self.r
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().take(i).all(|v| v.abs() <= tol))
    }
}

/// Factorize with the default nalgebra backend; non-finite cells propagate.
pub fn factorize(matrix: &[Vec<f64>]) -> Result<QrResult, MatrixError> {
    factorize_with(&NalgebraQr, matrix, &FactorizeOptions::default())
}

pub fn factorize_with<B: QrBackend + ?Sized>(
    backend: &B,
    matrix: &[Vec<f64>],
    opts: &FactorizeOptions,
) -> Result<QrResult, MatrixError> {
    let (rows, cols) = shape::dims(matrix)?;
    if opts.non_finite == NonFinitePolicy::Reject {
        shape::ensure_finite(matrix)?;
    }

    let mut values = shape::flatten_row_major(matrix);
    let finite_input = values.iter().all(|v| v.is_finite());
    let scale = if finite_input { power_of_two_scale(&values) } else { 1.0 };
    if scale != 1.0 {
        values.iter_mut().for_each(|v| *v /= scale);
    }

    let (q, r) = backend.factorize(&values, rows, cols)?;
    check_factor_dims(backend.name(), rows, cols, &q, &r)?;

    let q = to_grid(&q);
    let mut r = to_grid(&r);
    if scale != 1.0 {
        r.iter_mut().flatten().for_each(|v| *v *= scale);
    }

    if finite_input {
        if let Some((name, i, j)) = first_non_finite(&q, &r) {
            return Err(MatrixError::Factorization(format!(
                "{} produced a non-finite {name}[{i}][{j}] from finite input",
                backend.name()
            )));
        }
    }
    Ok(QrResult { q, r })
}

/// Power of two near max|a|, so dividing by it and multiplying R back are exact.
/// Keeps Σx² inside f64 range for the backend's unscaled column norms.
fn power_of_two_scale(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if max == 0.0 {
        return 1.0;
    }
    let exp = (max.log2().floor() as i64).clamp(-1022, 1023);
    f64::from_bits(((exp + 1023) as u64) << 52)
}

fn first_non_finite(q: &[Vec<f64>], r: &[Vec<f64>]) -> Option<(&'static str, usize, usize)> {
    for (name, grid) in [("Q", q), ("R", r)] {
        for (i, row) in grid.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Some((name, i, j));
            }
        }
    }
    None
}

fn check_factor_dims<M: DenseMatrix>(
    backend: &str,
    rows: usize,
    cols: usize,
    q: &M,
    r: &M,
) -> Result<(), MatrixError> {
    let k = rows.min(cols);
    let (qr, qc) = q.dims();
    let (rr, rc) = r.dims();
    if (qr, qc) != (rows, k) || (rr, rc) != (k, cols) {
        return Err(MatrixError::Factorization(format!(
            "{backend} returned Q {qr}x{qc} and R {rr}x{rc} for a {rows}x{cols} input"
        )));
    }
    Ok(())
}
