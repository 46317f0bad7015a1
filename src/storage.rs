//! Backing stores for polynomial terms.
//!
//! A store maps exponents to coefficients. It does not know about
//! normalization: keeping coefficients non-zero is the job of
//! [`SparsePoly`](crate::SparsePoly), which only calls [`TermStore::insert`]
//! for exponents that are absent and removes entries that cancel out.

use std::fmt::Debug;

mod list;
mod map;

pub use list::ListStore;
pub use map::MapStore;

/// Storage for the terms of a univariate sparse polynomial.
pub trait TermStore<T>: Default + Clone + Debug {
    /// Number of stored terms.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coefficient stored for `exponent`, if any.
    fn get(&self, exponent: u32) -> Option<&T>;

    fn get_mut(&mut self, exponent: u32) -> Option<&mut T>;

    /// Store a new term.
    ///
    /// The caller guarantees that `exponent` is not already present.
    fn insert(&mut self, exponent: u32, coeff: T);

    /// Remove the term with the given exponent, returning its coefficient.
    fn remove(&mut self, exponent: u32) -> Option<T>;

    /// Iterate over `(exponent, coefficient)` pairs, from the highest degree
    /// down.
    fn iter<'a>(&'a self) -> impl Iterator<Item = (u32, &'a T)>
    where
        T: 'a;
}
