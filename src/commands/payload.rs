//! Payload I/O shared by the subcommands: JSON in from file/stdin, JSON out to file/stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::io::write_json_atomic;

fn is_stdin(input: &Option<PathBuf>) -> bool {
    match input {
        None => true,
        Some(p) => p.as_os_str() == "-",
    }
}

pub fn read_payload<T: DeserializeOwned>(input: &Option<PathBuf>) -> Result<T> {
    let (txt, origin) = if is_stdin(input) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        (buf, "<stdin>".to_string())
    } else {
        let p: &Path = input.as_deref().unwrap_or(Path::new("-"));
        let txt = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        (txt, p.display().to_string())
    };
    serde_json::from_str(&txt).with_context(|| format!("parsing JSON payload from {origin}"))
}

pub fn write_payload<T: Serialize>(out: &Option<PathBuf>, value: &T, pretty: bool) -> Result<()> {
    match out {
        Some(p) => write_json_atomic(p, value, pretty)
            .with_context(|| format!("writing {}", p.display())),
        None => {
            let txt = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{txt}").context("writing stdout")?;
            Ok(())
        }
    }
}
