use itertools::Itertools;

use crate::{
    error::{Error, Result},
    storage::TermStore,
    Coefficient, SparsePoly,
};

/// How an incoming coefficient is combined with a stored one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Merge {
    Add,
    Sub,
}

impl<T: Coefficient, S: TermStore<T>> SparsePoly<T, S> {
    /// Merge the term `coeff * x^exponent` into the polynomial.
    ///
    /// A zero coefficient is ignored. If a term with the same exponent is
    /// already present the coefficients are added, and the term disappears
    /// when they cancel out.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if the sum does not fit in `T`. The
    /// polynomial is left unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::Poly64;
    ///
    /// let mut p = Poly64::new();
    /// p.insert(3, 2).unwrap();
    /// p.insert(1, 0).unwrap();
    /// p.insert(-3, 2).unwrap();
    /// assert_eq!(p.to_string(), "1");
    /// ```
    pub fn insert(&mut self, coeff: T, exponent: u32) -> Result<()> {
        self.merge(coeff, exponent, Merge::Add)
    }

    /// Like [`SparsePoly::insert`], but merges `-coeff`.
    pub(crate) fn merge_neg(&mut self, coeff: T, exponent: u32) -> Result<()> {
        self.merge(coeff, exponent, Merge::Sub)
    }

    fn merge(&mut self, coeff: T, exponent: u32, op: Merge) -> Result<()> {
        if coeff.is_zero() {
            return Ok(());
        }

        match self.store.get_mut(exponent) {
            Some(existing) => {
                let merged = match op {
                    Merge::Add => existing.checked_add(&coeff),
                    Merge::Sub => existing.checked_sub(&coeff),
                }
                .ok_or_else(|| Error::coefficient_overflow(exponent))?;
                if !merged.is_zero() {
                    *existing = merged;
                    return Ok(());
                }
            }
            None => {
                let coeff = match op {
                    Merge::Add => coeff,
                    Merge::Sub => T::zero()
                        .checked_sub(&coeff)
                        .ok_or_else(|| Error::coefficient_overflow(exponent))?,
                };
                self.store.insert(exponent, coeff);
                return Ok(());
            }
        }

        // like terms cancelled out
        log::trace!("dropping cancelled term of degree {exponent}");
        self.store.remove(exponent);
        Ok(())
    }

    /// Build a polynomial from raw terms, summing like terms as a whole.
    ///
    /// Only the final coefficient of each degree is checked against the
    /// range of `T`, so the outcome does not depend on the order of `terms`.
    pub(crate) fn collect_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let groups = terms
            .into_iter()
            .filter(|(c, _)| !c.is_zero())
            .map(|(c, e)| (e, c))
            .into_group_map();

        let mut res = Self::new();
        // highest degree first, so the reported overflow is deterministic
        for (exponent, coeffs) in groups.into_iter().sorted_unstable_by(|a, b| b.0.cmp(&a.0)) {
            let coeff = balanced_sum(coeffs, exponent)?;
            if coeff.is_zero() {
                log::trace!("dropping cancelled term of degree {exponent}");
            } else {
                res.store.insert(exponent, coeff);
            }
        }
        Ok(res)
    }

    /// Checks the normalization invariants. Only used in debug assertions.
    pub(crate) fn is_normalized(&self) -> bool {
        let mut prev: Option<u32> = None;
        for (e, c) in self.store.iter() {
            if c.is_zero() || prev.is_some_and(|p| p <= e) {
                return false;
            }
            prev = Some(e);
        }
        true
    }
}

/// Sum `coeffs`, overflowing only if the total does not fit in `T`.
///
/// Negative and positive values are interleaved so that the running sum moves
/// toward zero whenever it can. Once one sign runs out, the remaining values
/// move the sum monotonically to the total, so every partial sum lies between
/// two values that fit.
fn balanced_sum<T: Coefficient>(coeffs: Vec<T>, exponent: u32) -> Result<T> {
    let (mut neg, mut pos): (Vec<T>, Vec<T>) = coeffs.into_iter().partition(|c| c.is_negative());
    let mut acc = T::zero();
    loop {
        let next = if acc.is_negative() {
            pos.pop().or_else(|| neg.pop())
        } else {
            neg.pop().or_else(|| pos.pop())
        };
        let Some(c) = next else {
            return Ok(acc);
        };
        acc = acc
            .checked_add(&c)
            .ok_or_else(|| Error::coefficient_overflow(exponent))?;
    }
}
