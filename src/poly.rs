use std::{fmt, marker::PhantomData};

use crate::{
    error::{Error, Result},
    storage::{MapStore, TermStore},
    Coefficient,
};

mod base;
mod conversions;
mod impl_num;
mod parse;

/// A univariate polynomial that stores only its non-zero terms.
///
/// Terms are `(coefficient, exponent)` pairs. The polynomial is always
/// normalized: every exponent appears at most once, no coefficient is zero,
/// and [`SparsePoly::terms`] yields terms from the highest degree down. The
/// zero polynomial has no terms at all.
///
/// `S` selects the backing store, see [`crate::storage`].
#[derive(Clone, Debug)]
pub struct SparsePoly<T, S = MapStore<T>> {
    pub(crate) store: S,
    _coeff: PhantomData<T>,
}

impl<T: Coefficient, S: TermStore<T>> SparsePoly<T, S> {
    /// The zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: S::default(),
            _coeff: PhantomData,
        }
    }

    /// A polynomial with a single term, `coeff * x^exponent`.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::Poly64;
    ///
    /// assert_eq!(Poly64::term(-4, 3).to_string(), "-4x^3");
    /// assert!(Poly64::term(0, 3).is_zero());
    /// ```
    #[must_use]
    pub fn term(coeff: T, exponent: u32) -> Self {
        let mut res = Self::new();
        if !coeff.is_zero() {
            res.store.insert(exponent, coeff);
        }
        res
    }

    /// Number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Same as [`SparsePoly::is_zero`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// True for the zero polynomial, which has no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.store.is_empty()
    }

    /// True for the constant polynomial `1`.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.len() == 1 && self.store.get(0).is_some_and(T::is_one)
    }

    /// The highest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.store.iter().next().map(|(e, _)| e)
    }

    /// The term of highest degree as `(coefficient, exponent)`.
    #[must_use]
    pub fn leading(&self) -> Option<(T, u32)> {
        self.store.iter().next().map(|(e, c)| (c.clone(), e))
    }

    /// The coefficient of `x^exponent`, zero if there is no such term.
    #[must_use]
    pub fn coeff(&self, exponent: u32) -> T {
        self.store.get(exponent).cloned().unwrap_or_else(T::zero)
    }

    /// Iterate over `(coefficient, exponent)` pairs, from the highest degree
    /// down.
    pub fn terms(&self) -> impl Iterator<Item = (&T, u32)> {
        self.store.iter().map(|(e, c)| (c, e))
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// Uses Horner's method, skipping over missing terms with integer powers
    /// of `x`. By convention `0^0 = 1`, so a constant term always contributes
    /// its coefficient.
    ///
    /// Coefficients beyond the range of `f64` (possible with
    /// [`num::BigInt`]) convert to `±inf`, and the result is infinite or
    /// `NaN` accordingly.
    ///
    /// ```
    /// use sparse_poly::{poly, Poly64};
    ///
    /// let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
    /// assert_eq!(p.eval(2.0), 17.0);
    /// assert_eq!(p.eval(0.0), 1.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        let mut prev: Option<u32> = None;
        for (e, c) in self.store.iter() {
            if let Some(p) = prev {
                acc *= powu(x, p - e);
            }
            acc += c.to_f64().unwrap_or(f64::NAN);
            prev = Some(e);
        }
        match prev {
            Some(last) => acc * powu(x, last),
            None => 0.0,
        }
    }

    /// Evaluate the polynomial exactly at an integer point.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if an intermediate value does not fit
    /// in `T`. The reported degree is the term being accumulated.
    ///
    /// ```
    /// use sparse_poly::{poly, Poly64, Poly32};
    ///
    /// let p: Poly64 = poly![(1, 2), (-1, 0)];
    /// assert_eq!(p.checked_eval(&3).unwrap(), 8);
    ///
    /// let q: Poly32 = poly![(1, 40)];
    /// assert!(q.checked_eval(&2).is_err());
    /// ```
    pub fn checked_eval(&self, x: &T) -> Result<T> {
        let mut acc = T::zero();
        let mut prev: Option<u32> = None;
        for (e, c) in self.store.iter() {
            if let Some(p) = prev {
                acc = checked_powu(x, p - e)
                    .and_then(|xp| acc.checked_mul(&xp))
                    .ok_or_else(|| Error::coefficient_overflow(e))?;
            }
            acc = acc
                .checked_add(c)
                .ok_or_else(|| Error::coefficient_overflow(e))?;
            prev = Some(e);
        }
        match prev {
            Some(last) => checked_powu(x, last)
                .and_then(|xp| acc.checked_mul(&xp))
                .ok_or_else(|| Error::coefficient_overflow(last)),
            None => Ok(T::zero()),
        }
    }
}

impl<T: Coefficient, S: TermStore<T>> Default for SparsePoly<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// `x^n` for a non-negative integer `n`, with `0^0 = 1`.
fn powu(x: f64, n: u32) -> f64 {
    // `powi` takes an i32, larger exponents go through `pow` by squaring
    i32::try_from(n).map_or_else(|_| num::pow(x, n as usize), |n| x.powi(n))
}

fn checked_powu<T: Coefficient>(x: &T, n: u32) -> Option<T> {
    if n == 0 {
        return Some(T::one());
    }
    num::checked_pow(x.clone(), usize::try_from(n).ok()?)
}

impl<T: Coefficient, S: TermStore<T>> fmt::Display for SparsePoly<T, S> {
    /// Renders terms from the highest degree down, e.g. `-3x^2 + 1x - 5`.
    ///
    /// The zero polynomial renders as `0`. Coefficients are always printed,
    /// including a magnitude of `1`. With the alternate flag (`{:#}`) unit
    /// magnitudes of non-constant terms are left out instead, e.g.
    /// `-3x^2 + x - 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (e, c) in self.store.iter() {
            let negative = c.is_negative();
            match (first, negative) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            // the magnitude is taken from the rendered digits, since `abs`
            // overflows on the most negative value of a bounded type
            let rendered = c.to_string();
            let magnitude = rendered.trim_start_matches('-');
            let elide = f.alternate() && e > 0 && (c.is_one() || *c == T::zero() - T::one());
            if !elide {
                f.write_str(magnitude)?;
            }
            match e {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{e}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
