//! Rotate, then factorize the rotated grid.

use crate::core::backend::{NalgebraQr, QrBackend};
use crate::core::error::MatrixError;
use crate::core::factorizer::{factorize_with, FactorizeOptions, QrResult};
use crate::core::rotator::rotate;

pub fn rotate_then_factorize(matrix: &[Vec<f64>]) -> Result<QrResult, MatrixError> {
    rotate_then_factorize_with(&NalgebraQr, matrix, &FactorizeOptions::default())
}

pub fn rotate_then_factorize_with<B: QrBackend + ?Sized>(
    backend: &B,
    matrix: &[Vec<f64>],
    opts: &FactorizeOptions,
) -> Result<QrResult, MatrixError> {
    let rotated = rotate(matrix)?;
    factorize_with(backend, &rotated, opts)
}
