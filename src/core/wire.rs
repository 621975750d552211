//! JSON payload shapes of the surrounding request/response layer.
//!
//! serde_json has no NaN/Infinity: non-finite cells serialize as `null`, and
//! `null` cells in a `QrResponse` read back as NaN.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::factorizer::QrResult;
use crate::core::stats::QrStats;

/// `{"data": [[..], ..]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixRequest {
    pub data: Vec<Vec<f64>>,
}

/// `{"Q": [[..]], "R": [[..]]}`, optionally with `"stats"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrResponse {
    #[serde(rename = "Q", deserialize_with = "nullable_grid")]
    pub q: Vec<Vec<f64>>,
    #[serde(rename = "R", deserialize_with = "nullable_grid")]
    pub r: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<QrStats>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<QrResult> for QrResponse {
    fn from(qr: QrResult) -> Self {
        Self { q: qr.q, r: qr.r, stats: None }
    }
}

impl From<QrResponse> for QrResult {
    fn from(resp: QrResponse) -> Self {
        Self { q: resp.q, r: resp.r }
    }
}

fn nullable_grid<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<f64>>, D::Error> {
    let rows = Vec::<Vec<Option<f64>>>::deserialize(d)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
        .collect())
}
