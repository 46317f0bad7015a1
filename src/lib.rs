//! Sparse univariate polynomials with integer coefficients.
//!
//! A [`SparsePoly`] stores only its non-zero terms, one per exponent, and
//! always iterates them from the highest degree down. Arithmetic is checked:
//! the `try_*` methods report overflow as an [`Error`], while the operator
//! traits panic with the same message.
//!
//! ```
//! use sparse_poly::{poly, Poly64};
//!
//! let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
//! let q: Poly64 = poly![(-3, 2), (5, 0)];
//! assert_eq!(p.to_string(), "3x^2 + 2x + 1");
//! assert_eq!(q.to_string(), "-3x^2 + 5");
//! assert_eq!((&p + &q).to_string(), "2x + 6");
//! assert_eq!(p.eval(2.0), 17.0);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

mod aliases;
pub use aliases::{BigPoly, ListPoly64, Poly32, Poly64};

mod error;
pub use error::{Error, ParseError, Result};

mod poly;
pub use poly::SparsePoly;

mod scalar;
pub use scalar::Coefficient;

pub mod storage;
pub use storage::{ListStore, MapStore, TermStore};

mod util;

// re-exported for the integration tests and benchmarks
#[doc(hidden)]
pub use util::__testing;

/// Build a polynomial from `(coefficient, exponent)` pairs.
///
/// Like terms are merged, zero coefficients are dropped.
///
/// # Examples
/// ```
/// use sparse_poly::{poly, Poly64};
///
/// let p: Poly64 = poly![(1, 1), (1, 0)];
/// assert_eq!(p.to_string(), "1x + 1");
///
/// let zero: Poly64 = poly![];
/// assert_eq!(zero.to_string(), "0");
/// ```
///
/// # Panics
/// If merging the terms overflows the coefficient type.
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::SparsePoly::new()
    }};
    ($(($c:expr, $e:expr)),+ $(,)?) => {{
        match $crate::SparsePoly::from_terms([$(($c, $e)),+]) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }};
}
