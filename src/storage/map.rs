use std::collections::BTreeMap;

use super::TermStore;

/// Terms kept in a [`BTreeMap`] keyed by exponent.
///
/// Merging a term costs `O(log n)`. This is the default store.
#[derive(Clone, Debug)]
pub struct MapStore<T>(BTreeMap<u32, T>);

impl<T> Default for MapStore<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Clone + std::fmt::Debug> TermStore<T> for MapStore<T> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn get(&self, exponent: u32) -> Option<&T> {
        self.0.get(&exponent)
    }

    #[inline]
    fn get_mut(&mut self, exponent: u32) -> Option<&mut T> {
        self.0.get_mut(&exponent)
    }

    fn insert(&mut self, exponent: u32, coeff: T) {
        let old = self.0.insert(exponent, coeff);
        debug_assert!(old.is_none(), "exponent {exponent} was already stored");
    }

    fn remove(&mut self, exponent: u32) -> Option<T> {
        self.0.remove(&exponent)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (u32, &'a T)>
    where
        T: 'a,
    {
        // keys are ascending, terms are iterated from the highest degree
        self.0.iter().rev().map(|(e, c)| (*e, c))
    }
}
