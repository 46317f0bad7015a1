//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{storage::TermStore, SparsePoly};

/// An endless stream of random `(coefficient, exponent)` pairs.
///
/// Coefficients may be zero and exponents repeat often, so the pairs
/// exercise both merging and cancellation.
pub struct RandTermStream {
    state: Rng,
    max_coeff: i64,
    max_exponent: u32,
}

impl RandTermStream {
    #[must_use]
    pub fn new(seed: u64, max_coeff: i64, max_exponent: u32) -> Self {
        assert!(max_coeff >= 0, "coefficient bound should be non-negative");
        Self {
            state: Rng::with_seed(seed),
            max_coeff,
            max_exponent,
        }
    }

    /// Draw a length, then that many raw terms.
    pub fn raw_terms(&mut self, max_len: usize) -> Vec<(i64, u32)> {
        let len = self.state.usize(..=max_len);
        self.by_ref().take(len).collect_vec()
    }

    /// A random polynomial built from [`RandTermStream::raw_terms`].
    ///
    /// # Panics
    /// If the coefficient bound is large enough for merging to overflow.
    pub fn poly<S: TermStore<i64>>(&mut self, max_len: usize) -> SparsePoly<i64, S> {
        SparsePoly::from_terms(self.raw_terms(max_len))
            .expect("coefficient bound is too large for i64")
    }

    /// Shuffle a slice in place with this stream's generator.
    pub fn shuffle<X>(&mut self, items: &mut [X]) {
        self.state.shuffle(items);
    }

    /// A random evaluation point in `[-max, max)`.
    pub fn point(&mut self, max: f64) -> f64 {
        self.state.f64().mul_add(2.0 * max, -max)
    }
}

impl Iterator for RandTermStream {
    type Item = (i64, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let coeff = self.state.i64(-self.max_coeff..=self.max_coeff);
        let exponent = self.state.u32(..=self.max_exponent);
        Some((coeff, exponent))
    }
}

/// Check that two floats are equal up to a relative tolerance.
#[must_use]
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

#[cfg(test)]
mod test {
    use super::{almost_equal, RandTermStream};
    use crate::Poly64;

    #[test]
    fn stream_is_deterministic() {
        let a = RandTermStream::new(7, 10, 5).raw_terms(20);
        let b = RandTermStream::new(7, 10, 5).raw_terms(20);
        assert_eq!(a, b);
    }

    #[test]
    fn stream_respects_bounds() {
        let mut s = RandTermStream::new(1, 3, 4);
        for (c, e) in s.by_ref().take(1000) {
            assert!((-3..=3).contains(&c));
            assert!(e <= 4);
        }
        let p: Poly64 = s.poly(50);
        assert!(p.degree().map_or(true, |d| d <= 4));
    }

    #[test]
    fn tolerance() {
        assert!(almost_equal(1e12, 1e12 + 1.0, 1e-9));
        assert!(!almost_equal(1.0, 1.1, 1e-9));
    }
}
