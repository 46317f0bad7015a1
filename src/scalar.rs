use std::{fmt, str::FromStr};

use num::{CheckedAdd, CheckedMul, CheckedSub, Signed, ToPrimitive};

/// Types usable as polynomial coefficients.
///
/// All arithmetic on coefficients goes through the checked operations, so
/// bounded integers report overflow instead of wrapping. Implemented for the
/// primitive signed integers and [`num::BigInt`], which never overflows.
pub trait Coefficient:
    Clone
    + Eq
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Signed
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + ToPrimitive
{
}

impl<T> Coefficient for T where
    T: Clone
        + Eq
        + fmt::Debug
        + fmt::Display
        + FromStr
        + Signed
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + ToPrimitive
{
}
