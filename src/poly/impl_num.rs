#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations and operators

use num::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

use crate::{
    error::{Error, Result},
    storage::TermStore,
    util::doc_macros::panic_overflow,
    Coefficient, SparsePoly,
};

impl<T: Coefficient, S: TermStore<T>> SparsePoly<T, S> {
    /// Add two polynomials, reporting overflow instead of panicking.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if a merged coefficient does not fit
    /// in `T`.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::{poly, Poly64, SparsePoly};
    ///
    /// let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
    /// let q: Poly64 = poly![(-3, 2), (5, 0)];
    /// assert_eq!(p.try_add(&q).unwrap(), poly![(2, 1), (6, 0)]);
    ///
    /// let big = SparsePoly::<i8>::term(100, 0);
    /// assert!(big.try_add(&big).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let mut res = self.clone();
        for (e, c) in rhs.store.iter() {
            res.insert(c.clone(), e)?;
        }
        Ok(res)
    }

    /// Subtract `rhs` from `self`, reporting overflow instead of panicking.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if a merged coefficient does not fit
    /// in `T`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let mut res = self.clone();
        for (e, c) in rhs.store.iter() {
            res.merge_neg(c.clone(), e)?;
        }
        Ok(res)
    }

    /// Multiply two polynomials, reporting overflow instead of panicking.
    ///
    /// Every pair of terms contributes one product term, so the cost is
    /// proportional to `self.len() * rhs.len()` merges.
    ///
    /// # Errors
    /// - [`Error::CoefficientOverflow`] if the product of two coefficients,
    ///   or the summed coefficient of some degree, does not fit in `T`.
    /// - [`Error::ExponentOverflow`] if the sum of two exponents does not
    ///   fit in `u32`.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::{poly, Poly64};
    ///
    /// let a: Poly64 = poly![(1, 1), (1, 0)];
    /// let b: Poly64 = poly![(1, 1), (-1, 0)];
    /// assert_eq!(a.try_mul(&b).unwrap(), poly![(1, 2), (-1, 0)]);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let mut products = Vec::with_capacity(self.len() * rhs.len());
        // highest degree with a product out of range, the same for `b * a`
        let mut overflow: Option<u32> = None;
        for (ea, ca) in self.store.iter() {
            for (eb, cb) in rhs.store.iter() {
                let exponent = ea
                    .checked_add(eb)
                    .ok_or(Error::ExponentOverflow { lhs: ea, rhs: eb })?;
                match ca.checked_mul(cb) {
                    Some(coeff) => products.push((coeff, exponent)),
                    None => overflow = overflow.max(Some(exponent)),
                }
            }
        }
        if let Some(exponent) = overflow {
            return Err(Error::coefficient_overflow(exponent));
        }
        // summing each degree as a whole keeps `a * b` and `b * a` in step
        let res = Self::collect_terms(products)?;

        // post-condition: product is normalized
        debug_assert!(res.is_normalized());
        Ok(res)
    }

    /// Negate every coefficient.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if a coefficient is the most negative
    /// value of a bounded type.
    pub fn try_neg(&self) -> Result<Self> {
        Self::new().try_sub(self)
    }

    /// Raise the polynomial to a non-negative integer power.
    ///
    /// `p^0` is one, including for the zero polynomial.
    ///
    /// # Errors
    /// Same as [`SparsePoly::try_mul`].
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::{poly, Poly64};
    ///
    /// let p: Poly64 = poly![(1, 1), (1, 0)];
    /// assert_eq!(p.try_pow(2).unwrap().to_string(), "1x^2 + 2x + 1");
    /// ```
    pub fn try_pow(&self, mut pow: u32) -> Result<Self> {
        let mut res = Self::one_impl();
        let mut base = self.clone();
        while pow > 0 {
            if pow & 1 == 1 {
                res = res.try_mul(&base)?;
            }
            pow >>= 1;
            if pow > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(res)
    }

    /// Same as [`SparsePoly::try_pow`].
    ///
    /// # Panics
    #[doc = panic_overflow!()]
    #[must_use]
    pub fn pow(&self, pow: u32) -> Self {
        unwrap_arith(self.try_pow(pow))
    }

    fn one_impl() -> Self {
        Self::term(T::one(), 0)
    }
}

/// Operators cannot return errors, overflow panics like it does for the
/// primitive integers in debug builds.
fn unwrap_arith<P>(res: Result<P>) -> P {
    match res {
        Ok(p) => p,
        Err(e) => panic!("{e}"),
    }
}

impl<T: Coefficient, S: TermStore<T>> Add<Self> for SparsePoly<T, S> {
    type Output = Self;

    /// # Panics
    #[doc = panic_overflow!()]
    fn add(self, rhs: Self) -> Self::Output {
        unwrap_arith(self.try_add(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Add<&Self> for SparsePoly<T, S> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        unwrap_arith(self.try_add(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Add<SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn add(self, rhs: SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_add(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Add<&SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn add(self, rhs: &SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_add(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Sub<Self> for SparsePoly<T, S> {
    type Output = Self;

    /// # Panics
    #[doc = panic_overflow!()]
    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_arith(self.try_sub(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Sub<&Self> for SparsePoly<T, S> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        unwrap_arith(self.try_sub(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Sub<SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn sub(self, rhs: SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_sub(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Sub<&SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn sub(self, rhs: &SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_sub(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Mul<Self> for SparsePoly<T, S> {
    type Output = Self;

    /// # Panics
    #[doc = panic_overflow!()]
    fn mul(self, rhs: Self) -> Self::Output {
        unwrap_arith(self.try_mul(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Mul<&Self> for SparsePoly<T, S> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        unwrap_arith(self.try_mul(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Mul<SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn mul(self, rhs: SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_mul(&rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Mul<&SparsePoly<T, S>> for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn mul(self, rhs: &SparsePoly<T, S>) -> Self::Output {
        unwrap_arith(self.try_mul(rhs))
    }
}

impl<T: Coefficient, S: TermStore<T>> Neg for SparsePoly<T, S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        unwrap_arith(self.try_neg())
    }
}

impl<T: Coefficient, S: TermStore<T>> Neg for &SparsePoly<T, S> {
    type Output = SparsePoly<T, S>;

    fn neg(self) -> Self::Output {
        unwrap_arith(self.try_neg())
    }
}

impl<T: Coefficient, S: TermStore<T>> CheckedAdd for SparsePoly<T, S> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_add(v).ok()
    }
}

impl<T: Coefficient, S: TermStore<T>> CheckedSub for SparsePoly<T, S> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(v).ok()
    }
}

impl<T: Coefficient, S: TermStore<T>> CheckedMul for SparsePoly<T, S> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.try_mul(v).ok()
    }
}

impl<T: Coefficient, S: TermStore<T>> Zero for SparsePoly<T, S> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.store.is_empty()
    }
}

impl<T: Coefficient, S: TermStore<T>> One for SparsePoly<T, S> {
    fn one() -> Self {
        Self::one_impl()
    }

    fn is_one(&self) -> bool {
        self.len() == 1 && self.coeff(0).is_one()
    }
}

impl<T: Coefficient, S: TermStore<T>> std::iter::Sum for SparsePoly<T, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: Coefficient, S: TermStore<T>> std::iter::Product for SparsePoly<T, S> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
