//! Summary statistics over a QR result (all cells of Q, then all cells of R).

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::factorizer::QrResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrStats {
    // NaN goes out as JSON null; read it back the same way
    #[serde(deserialize_with = "nullable")]
    pub max: f64,
    #[serde(deserialize_with = "nullable")]
    pub min: f64,
    #[serde(deserialize_with = "nullable")]
    pub sum: f64,
    #[serde(deserialize_with = "nullable")]
    pub average: f64,
    /// Q or R has every off-diagonal cell exactly zero.
    pub is_diagonal: bool,
}

fn nullable<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

pub fn summarize(qr: &QrResult) -> QrStats {
    summarize_grids(&qr.q, &qr.r)
}

pub fn summarize_grids(q: &[Vec<f64>], r: &[Vec<f64>]) -> QrStats {
    let values = q.iter().chain(r).flatten().copied();

    let mut count = 0usize;
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for v in values {
        count += 1;
        sum += v;
        // f64::max/min skip NaN; keep it sticky instead
        max = if v.is_nan() || max.is_nan() { f64::NAN } else { max.max(v) };
        min = if v.is_nan() || min.is_nan() { f64::NAN } else { min.min(v) };
    }
    let average = if count == 0 { f64::NAN } else { sum / count as f64 };

    QrStats {
        max,
        min,
        sum,
        average,
        is_diagonal: is_diagonal(q) || is_diagonal(r),
    }
}

pub fn is_diagonal(matrix: &[Vec<f64>]) -> bool {
    matrix
        .iter()
        .enumerate()
        .all(|(i, row)| row.iter().enumerate().all(|(j, &v)| i == j || v == 0.0))
}
