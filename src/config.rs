//! Settings: built-in defaults + optional TOML config.
//!
//! - `--config FILE` wins; otherwise ~/.rotqr/config.toml if present
//! - every key is optional and falls back to `Settings::default()`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{FactorizeOptions, NonFinitePolicy};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Absolute per-cell tolerance for `--verify`.
    pub tolerance: f64,
    pub reject_non_finite: bool,
    pub pretty: bool,
    pub verify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { tolerance: 1e-9, reject_non_finite: false, pretty: false, verify: false }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let s: Settings = toml::from_str(txt).context("parsing settings")?;
        anyhow::ensure!(
            s.tolerance.is_finite() && s.tolerance >= 0.0,
            "tolerance must be a non-negative finite number, got {}",
            s.tolerance
        );
        Ok(s)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("loading {}", path.display()))
    }

    /// Explicit path must load; the user default is best-effort.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        let Some(p) = resolve_config_path(cli_path) else {
            return Ok(Self::default());
        };
        if cli_path.is_some() {
            return Self::from_toml_file(&p);
        }
        if p.exists() {
            match Self::from_toml_file(&p) {
                Ok(s) => return Ok(s),
                Err(e) => eprintln!("(warn) {e:#}, using defaults"),
            }
        }
        Ok(Self::default())
    }

    pub fn factorize_options(&self) -> FactorizeOptions {
        FactorizeOptions {
            non_finite: if self.reject_non_finite {
                NonFinitePolicy::Reject
            } else {
                NonFinitePolicy::Propagate
            },
        }
    }
}

/// ~/.rotqr/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".rotqr").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
