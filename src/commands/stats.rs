//! `rotqr stats`: summary of an existing {"Q", "R"} payload.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::payload::{read_payload, write_payload};
use crate::config::Settings;
use crate::core::stats::summarize;
use crate::core::{shape, QrResult};
use crate::core::wire::QrResponse;

pub fn stats_main(input: Option<PathBuf>, pretty: bool, settings: &Settings) -> Result<()> {
    let resp: QrResponse = read_payload(&input)?;
    let qr = QrResult::from(resp);
    shape::dims(&qr.q).context("Q")?;
    shape::dims(&qr.r).context("R")?;
    let stats = summarize(&qr);
    write_payload(&None, &stats, pretty || settings.pretty)
}
