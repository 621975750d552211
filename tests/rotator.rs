use rotqr::core::{rotate, rotate_towards, Direction, MatrixError};

fn grid(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|i| (0..cols).map(|j| (i * cols + j) as f64 + 0.5).collect())
        .collect()
}

fn shapes() -> Vec<(usize, usize)> {
    vec![(1, 1), (1, 4), (4, 1), (2, 2), (2, 3), (3, 2), (3, 3), (5, 7)]
}

#[test]
fn two_by_two_scenario() {
    let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    assert_eq!(rotate(&m).unwrap(), vec![vec![2.0, 4.0], vec![1.0, 3.0]]);
}

#[test]
fn one_by_one_is_unchanged() {
    assert_eq!(rotate(&[vec![1.0]]).unwrap(), vec![vec![1.0]]);
}

#[test]
fn dimensions_swap() {
    for (r, c) in shapes() {
        let out = rotate(&grid(r, c)).unwrap();
        assert_eq!(out.len(), c, "{r}x{c}");
        assert!(out.iter().all(|row| row.len() == r), "{r}x{c}");
    }
}

#[test]
fn four_turns_is_identity() {
    for dir in [Direction::CounterClockwise, Direction::Clockwise] {
        for (r, c) in shapes() {
            let m = grid(r, c);
            let mut out = m.clone();
            for _ in 0..4 {
                out = rotate_towards(&out, dir).unwrap();
            }
            assert_eq!(out, m, "{r}x{c} {dir:?}");
        }
    }
}

#[test]
fn two_turns_is_half_turn() {
    for (r, c) in shapes() {
        let m = grid(r, c);
        let twice = rotate(&rotate(&m).unwrap()).unwrap();
        for i in 0..r {
            for j in 0..c {
                assert_eq!(twice[i][j], m[r - 1 - i][c - 1 - j]);
            }
        }
    }
}

#[test]
fn clockwise_moves_last_row_to_first_column() {
    let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let cw = rotate_towards(&m, Direction::Clockwise).unwrap();
    assert_eq!(cw, vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
}

#[test]
fn values_are_copied_bit_for_bit() {
    let m = vec![vec![0.1 + 0.2, -0.0, f64::MIN_POSITIVE]];
    let out = rotate(&m).unwrap();
    let back: Vec<u64> = out.iter().rev().map(|row| row[0].to_bits()).collect();
    let orig: Vec<u64> = m[0].iter().map(|v| v.to_bits()).collect();
    assert_eq!(back, orig);
}

#[test]
fn shape_errors() {
    assert!(matches!(rotate(&[]), Err(MatrixError::Shape(_))));
    assert!(matches!(rotate(&[vec![]]), Err(MatrixError::Shape(_))));
    let ragged = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
    assert!(matches!(rotate(&ragged), Err(MatrixError::Shape(_))));
}
