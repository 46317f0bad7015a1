use num::BigInt;

use crate::{ListStore, SparsePoly};

pub type Poly32 = SparsePoly<i32>;

pub type Poly64 = SparsePoly<i64>;

/// Polynomial with arbitrary-precision coefficients, never overflows.
pub type BigPoly = SparsePoly<BigInt>;

/// Same as [`Poly64`], backed by a linked list that recycles its nodes.
pub type ListPoly64 = SparsePoly<i64, ListStore<i64>>;
