//! Quarter-turn grid rotation.

use serde::{Deserialize, Serialize};

use crate::core::error::MatrixError;
use crate::core::shape;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `out[i][j] = input[j][C-1-i]`: the last input column becomes the first output row.
    #[default]
    CounterClockwise,
    /// `out[i][j] = input[R-1-j][i]`: the last input row becomes the first output column.
    Clockwise,
}

/// Rotate an R×C grid 90° counter-clockwise into a C×R grid.
pub fn rotate(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MatrixError> {
    rotate_towards(matrix, Direction::CounterClockwise)
}

/// Rotate an R×C grid 90° into a C×R grid. Values are copied, never recomputed.
pub fn rotate_towards(
    matrix: &[Vec<f64>],
    direction: Direction,
) -> Result<Vec<Vec<f64>>, MatrixError> {
    let (rows, cols) = shape::dims(matrix)?;

    let mut rotated = vec![vec![0.0; rows]; cols];
    for (i, out_row) in rotated.iter_mut().enumerate() {
        for (j, cell) in out_row.iter_mut().enumerate() {
            *cell = match direction {
                Direction::CounterClockwise => matrix[j][cols - 1 - i],
                Direction::Clockwise => matrix[rows - 1 - j][i],
            };
        }
    }
    Ok(rotated)
}
