//! Core module tree: validation, rotation, QR factorization and the
//! plain-grid helpers around them. The numerical modules do no I/O and never
//! log; `debug` only holds the `debug_log!` gate used by the commands.

pub mod backend;
#[macro_use]
pub mod debug; // gated debug logging (ROTQR_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod factorizer;
pub mod linalg;
pub mod pipeline;
pub mod rotator;
pub mod shape;
pub mod stats;
pub mod wire;

pub use error::MatrixError;
pub use factorizer::{factorize, factorize_with, FactorizeOptions, NonFinitePolicy, QrResult};
pub use pipeline::{rotate_then_factorize, rotate_then_factorize_with};
pub use rotator::{rotate, rotate_towards, Direction};
