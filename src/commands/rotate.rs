//! `rotqr rotate`: rotation only, same payload shape in and out.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::payload::{read_payload, write_payload};
use crate::config::Settings;
use crate::core::{rotate_towards, Direction};
use crate::core::wire::MatrixRequest;
use crate::debug_log;

pub fn rotate_main(
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    pretty: bool,
    direction: Direction,
    settings: &Settings,
) -> Result<()> {
    let req: MatrixRequest = read_payload(&input)?;
    let data = rotate_towards(&req.data, direction)?;
    debug_log!("rotated {}x{} -> {}x{}", req.data.len(), data.len(), data.len(), data[0].len());
    write_payload(&out, &MatrixRequest { data }, pretty || settings.pretty)
}
