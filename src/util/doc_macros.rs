//! Macros for reducing doc comment boilerplate.

/// Documents panics of the arithmetic operators.
macro_rules! panic_overflow {
    () => {
        r"Panics if a coefficient overflows `T`, or if the degree of a product does not fit in `u32`. Use the `try_*` methods to handle these cases as errors instead.\n\n"
    };
}
pub(crate) use panic_overflow;
