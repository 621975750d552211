use std::fmt;

/// Failure kinds reported by the rotate/factorize core.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Empty matrix or rows of differing length.
    Shape(String),
    /// NaN or infinite cell, only raised when non-finite input is rejected.
    NonFinite(String),
    /// The linear-algebra primitive could not produce valid factors.
    Factorization(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape(msg) => write!(f, "Shape Error: {}", msg),
            MatrixError::NonFinite(msg) => write!(f, "Value Error: {}", msg),
            MatrixError::Factorization(msg) => write!(f, "Factorization Error: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

impl MatrixError {
    pub fn shape(message: &str) -> Self { MatrixError::Shape(message.to_string()) }
    pub fn non_finite(message: &str) -> Self { MatrixError::NonFinite(message.to_string()) }
    pub fn factorization(message: &str) -> Self { MatrixError::Factorization(message.to_string()) }

    /// Stable tag for callers that map failures onto transport codes.
    pub fn kind(&self) -> &'static str {
        match self {
            MatrixError::Shape(_) => "shape",
            MatrixError::NonFinite(_) => "non_finite",
            MatrixError::Factorization(_) => "factorization",
        }
    }

    /// Caller/input fault (4xx-class) as opposed to an internal computation fault.
    pub fn is_input_fault(&self) -> bool {
        matches!(self, MatrixError::Shape(_) | MatrixError::NonFinite(_))
    }
}
