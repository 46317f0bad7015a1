use itertools::Itertools;

use crate::{error::Result, storage::TermStore, Coefficient, Error, SparsePoly};

impl<T: Coefficient, S: TermStore<T>> SparsePoly<T, S> {
    /// Build a polynomial from raw `(coefficient, exponent)` pairs.
    ///
    /// Like terms are summed and cancelled terms disappear. Neither the
    /// result nor any error depends on the order of the input.
    ///
    /// # Errors
    /// [`Error::CoefficientOverflow`] if the summed coefficient of some
    /// degree does not fit in `T`. Sums that only pass out of range part way
    /// through are fine.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::Poly64;
    ///
    /// let p = Poly64::from_terms([(1, 0), (2, 1), (3, 2), (0, 5), (4, 1)]).unwrap();
    /// assert_eq!(p.to_string(), "3x^2 + 6x + 1");
    /// ```
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let res = Self::collect_terms(terms)?;
        debug_assert!(res.is_normalized());
        Ok(res)
    }

    /// The normalized terms as `(coefficient, exponent)` pairs, from the
    /// highest degree down.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(T, u32)> {
        self.terms().map(|(c, e)| (c.clone(), e)).collect_vec()
    }

    /// Move the terms into a different backing store.
    ///
    /// ```
    /// use sparse_poly::{poly, ListPoly64, Poly64};
    ///
    /// let p: Poly64 = poly![(2, 3), (-1, 0)];
    /// let l: ListPoly64 = p.clone().into_store();
    /// assert_eq!(l.to_string(), p.to_string());
    /// ```
    #[must_use]
    pub fn into_store<S2: TermStore<T>>(self) -> SparsePoly<T, S2> {
        let mut res = SparsePoly::<T, S2>::new();
        // terms are already normalized, nothing to merge
        for (e, c) in self.store.iter() {
            res.store.insert(e, c.clone());
        }
        res
    }
}

impl<T: Coefficient, S: TermStore<T>> PartialEq for SparsePoly<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.store.iter().eq(other.store.iter())
    }
}

impl<T: Coefficient, S: TermStore<T>> Eq for SparsePoly<T, S> {}

impl<T: Coefficient, S: TermStore<T>> TryFrom<Vec<(T, u32)>> for SparsePoly<T, S> {
    type Error = Error;

    fn try_from(value: Vec<(T, u32)>) -> Result<Self> {
        Self::from_terms(value)
    }
}

impl<T: Coefficient, S: TermStore<T>> TryFrom<&[(T, u32)]> for SparsePoly<T, S> {
    type Error = Error;

    fn try_from(value: &[(T, u32)]) -> Result<Self> {
        Self::from_terms(value.iter().cloned())
    }
}

impl<T: Coefficient, S: TermStore<T>> From<SparsePoly<T, S>> for Vec<(T, u32)> {
    fn from(val: SparsePoly<T, S>) -> Self {
        val.to_vec()
    }
}
