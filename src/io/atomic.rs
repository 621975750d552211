//! Atomic output writes with automatic parent creation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

pub fn atomic_write(dest: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> io::Result<()> {
    let dest = dest.as_ref();
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes.as_ref())?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Serialize `value` as JSON (newline-terminated) into `dest`.
pub fn write_json_atomic<T: Serialize + ?Sized>(
    dest: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> io::Result<()> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    bytes.push(b'\n');
    atomic_write(dest, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("out.json");
        write_json_atomic(&dest, &vec![vec![1.0, 2.0]], false).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "[[1.0,2.0]]\n");
        atomic_write(&dest, "x").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "x");
    }
}
