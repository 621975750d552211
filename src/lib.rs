//! rotqr: rotate a matrix 90° counter-clockwise, QR-factorize it, and hand
//! back (Q, R) as plain row-major grids.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{factorize, rotate, rotate_then_factorize, MatrixError, QrResult};
