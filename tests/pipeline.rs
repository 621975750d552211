use rotqr::core::stats::summarize;
use rotqr::core::wire::{MatrixRequest, QrResponse};
use rotqr::core::{rotate, rotate_then_factorize, MatrixError};

#[test]
fn rotate_then_factorize_reconstructs_rotated_input() {
    let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let qr = rotate_then_factorize(&m).unwrap();
    let rotated = rotate(&m).unwrap();
    assert_eq!(rotated, vec![vec![2.0, 4.0], vec![1.0, 3.0]]);
    assert!(qr.reconstruction_error(&rotated).unwrap() < 1e-9);
    assert!(qr.r[1][0].abs() < 1e-12);
}

#[test]
fn wide_input_becomes_tall() {
    // 2x3 rotates to 3x2; reduced Q is 3x2, R is 2x2
    let m = vec![vec![1.0, 0.0, 2.0], vec![-1.0, 3.0, 1.0]];
    let qr = rotate_then_factorize(&m).unwrap();
    assert_eq!((qr.q.len(), qr.q[0].len()), (3, 2));
    assert_eq!((qr.r.len(), qr.r[0].len()), (2, 2));
}

#[test]
fn no_partial_results_on_shape_error() {
    let err = rotate_then_factorize(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err.to_string(), "Shape Error: row 1 has 1 columns, expected 2");
    assert!(matches!(err, MatrixError::Shape(_)));
}

#[test]
fn stats_of_identity_like_result() {
    let qr = rotate_then_factorize(&[vec![1.0]]).unwrap();
    let s = summarize(&qr);
    assert_eq!(s.sum, qr.q[0][0] + qr.r[0][0]);
    assert!(s.is_diagonal);
}

#[test]
fn request_payload_shapes() {
    let req: MatrixRequest = serde_json::from_str(r#"{"data": [[1, 2], [3, 4]]}"#).unwrap();
    let out = MatrixRequest { data: rotate(&req.data).unwrap() };
    insta::assert_snapshot!(serde_json::to_string(&out).unwrap(), @r#"{"data":[[2.0,4.0],[1.0,3.0]]}"#);
}

#[test]
fn response_payload_uses_upper_case_keys() {
    let resp = QrResponse { q: vec![vec![1.0]], r: vec![vec![2.0]], stats: None };
    insta::assert_snapshot!(serde_json::to_string(&resp).unwrap(), @r#"{"Q":[[1.0]],"R":[[2.0]]}"#);
    let back: QrResponse = serde_json::from_str(r#"{"Q": [[1]], "R": [[2]]}"#).unwrap();
    assert_eq!(back, resp);
}
