//! `rotqr qr`: decode a matrix payload, rotate, factorize, encode (Q, R).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};

use crate::commands::payload::{read_payload, write_payload};
use crate::config::Settings;
use crate::core::backend::{NalgebraQr, QrBackend};
use crate::core::stats::summarize;
use crate::core::wire::{MatrixRequest, QrResponse};
use crate::core::{factorize_with, rotate_towards, shape, Direction, QrResult};
use crate::debug_log;

#[derive(Clone, Debug, Default)]
pub struct QrOpts {
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub pretty: bool,
    pub verify: bool,
    pub stats: bool,
    pub no_rotate: bool,
    pub direction: Direction,
}

pub fn qr_main(opts: QrOpts, settings: &Settings) -> Result<()> {
    let req: MatrixRequest = read_payload(&opts.input)?;
    let response = run(&req.data, &opts, settings)?;
    write_payload(&opts.out, &response, opts.pretty || settings.pretty)
}

/// Everything between decoded request and encodable response.
pub fn run(data: &[Vec<f64>], opts: &QrOpts, settings: &Settings) -> Result<QrResponse> {
    let backend = NalgebraQr;
    let t0 = Instant::now();

    let (rows, cols) = shape::dims(data)?;
    let input = if opts.no_rotate {
        data.to_vec()
    } else {
        rotate_towards(data, opts.direction)?
    };
    debug_log!(
        "input {rows}x{cols} -> factorizing {}x{} (rotate={}, {:?})",
        input.len(),
        input[0].len(),
        !opts.no_rotate,
        opts.direction
    );

    let qr = factorize_with(&backend, &input, &settings.factorize_options())?;
    debug_log!(
        "{}: Q {}x{}, R {}x{} in {:?}",
        backend.name(),
        qr.q.len(),
        qr.q[0].len(),
        qr.r.len(),
        qr.r[0].len(),
        t0.elapsed()
    );

    if opts.verify || settings.verify {
        verify(&qr, &input, settings.tolerance)?;
    }

    let stats = opts.stats.then(|| summarize(&qr));
    let mut response = QrResponse::from(qr);
    response.stats = stats;
    Ok(response)
}

fn verify(qr: &QrResult, input: &[Vec<f64>], tol: f64) -> Result<()> {
    let recon = qr.reconstruction_error(input)?;
    let ortho = qr.orthogonality_error()?;
    debug_log!("verify: |QR - A| = {recon:e}, |QtQ - I| = {ortho:e}, tol = {tol:e}");
    if recon.is_nan() || recon > tol {
        bail!("verification failed: max |Q·R - A| = {recon:e} exceeds {tol:e}");
    }
    if ortho.is_nan() || ortho > tol {
        bail!("verification failed: max |QᵗQ - I| = {ortho:e} exceeds {tol:e}");
    }
    if !qr.is_upper_triangular(tol) {
        bail!("verification failed: R has non-zero cells below the diagonal");
    }
    Ok(())
}
