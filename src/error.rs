use thiserror::Error;

/// Shorthand for results returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The top-level error type for this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coefficient left the range of the coefficient type.
    #[error("coefficient overflow in the term of degree {exponent}")]
    CoefficientOverflow { exponent: u32 },

    /// Multiplying two terms produced a degree that does not fit in `u32`.
    #[error("exponent overflow: degree {lhs} + {rhs} does not fit in u32")]
    ExponentOverflow { lhs: u32, rhs: u32 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reasons a textual term list is rejected.
///
/// Positions are zero-based indices into the whitespace-separated tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected an integer coefficient at token {position}, found `{token}`")]
    InvalidCoefficient { position: usize, token: String },

    #[error("expected an integer exponent at token {position}, found `{token}`")]
    InvalidExponent { position: usize, token: String },

    #[error("negative exponent {token} at token {position}")]
    NegativeExponent { position: usize, token: String },

    #[error("exponent {token} at token {position} is larger than u32::MAX")]
    ExponentOutOfRange { position: usize, token: String },

    #[error("expected a term count, found `{token}`")]
    InvalidCount { token: String },

    #[error("expected {expected} terms, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("unexpected token `{token}` at position {position}")]
    TrailingInput { position: usize, token: String },
}

impl Error {
    pub(crate) const fn coefficient_overflow(exponent: u32) -> Self {
        Self::CoefficientOverflow { exponent }
    }
}
