//! Reading polynomials from whitespace-separated integer tokens.

use std::str::FromStr;

use itertools::Itertools;

use crate::{
    error::{ParseError, Result},
    storage::TermStore,
    Coefficient, Error, SparsePoly,
};

impl<T: Coefficient, S: TermStore<T>> SparsePoly<T, S> {
    /// Parse `(coefficient, exponent)` pairs from whitespace-separated
    /// integer tokens, e.g. `"3 2 2 1 1 0"` for `3x^2 + 2x + 1`.
    ///
    /// An empty input is the zero polynomial.
    ///
    /// # Errors
    /// - [`ParseError`] if a token is not an integer, an exponent is
    ///   negative or too large, or the last pair is missing its exponent.
    /// - [`Error::CoefficientOverflow`] if merging like terms overflows.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::Poly64;
    ///
    /// let p = Poly64::parse_pairs("3 2 2 1 1 0").unwrap();
    /// assert_eq!(p.to_string(), "3x^2 + 2x + 1");
    /// assert!(Poly64::parse_pairs("3 2 2").is_err());
    /// ```
    pub fn parse_pairs(text: &str) -> Result<Self> {
        let tokens = text.split_whitespace().collect_vec();
        if tokens.len() % 2 != 0 {
            return Err(ParseError::Truncated {
                expected: tokens.len() / 2 + 1,
                found: tokens.len() / 2,
            }
            .into());
        }
        Self::from_tokens(&tokens, 0)
    }

    /// Parse a term count followed by that many `(coefficient, exponent)`
    /// pairs, e.g. `"3  3 2  2 1  1 0"` for `3x^2 + 2x + 1`.
    ///
    /// # Errors
    /// Same as [`SparsePoly::parse_pairs`], and additionally if the count is
    /// missing or not a non-negative integer, if fewer pairs than announced
    /// are present, or if tokens follow the last pair.
    ///
    /// # Examples
    /// ```
    /// use sparse_poly::{ParseError, Poly64, Error};
    ///
    /// let p = Poly64::parse_counted("2 -3 2 5 0").unwrap();
    /// assert_eq!(p.to_string(), "-3x^2 + 5");
    /// assert_eq!(
    ///     Poly64::parse_counted("3 -3 2 5 0"),
    ///     Err(Error::Parse(ParseError::Truncated { expected: 3, found: 2 })),
    /// );
    /// ```
    pub fn parse_counted(text: &str) -> Result<Self> {
        let tokens = text.split_whitespace().collect_vec();
        let Some((&count_token, rest)) = tokens.split_first() else {
            return Err(ParseError::InvalidCount {
                token: String::new(),
            }
            .into());
        };
        let count: usize = count_token.parse().map_err(|_| ParseError::InvalidCount {
            token: count_token.to_owned(),
        })?;

        let needed = count.saturating_mul(2);
        if rest.len() < needed {
            return Err(ParseError::Truncated {
                expected: count,
                found: rest.len() / 2,
            }
            .into());
        }
        if let Some(extra) = rest.get(needed) {
            return Err(ParseError::TrailingInput {
                position: needed + 1,
                token: (*extra).to_owned(),
            }
            .into());
        }
        Self::from_tokens(rest, 1)
    }

    /// Merge pairs of tokens, `offset` is the position of `tokens[0]` in the
    /// original input.
    fn from_tokens(tokens: &[&str], offset: usize) -> Result<Self> {
        let terms = tokens
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                let position = offset + 2 * i;
                let coeff = parse_coefficient::<T>(pair[0], position)?;
                let exponent = parse_exponent(pair[1], position + 1)?;
                Ok((coeff, exponent))
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        let res = Self::collect_terms(terms)?;
        log::debug!(
            "parsed {} raw terms into {} normalized terms",
            tokens.len() / 2,
            res.len()
        );
        Ok(res)
    }
}

fn parse_coefficient<T: FromStr>(token: &str, position: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidCoefficient {
        position,
        token: token.to_owned(),
    })
}

/// Exponents are classified by their shape first, so that a negative or
/// oversized integer is reported as such however many digits it has.
fn parse_exponent(token: &str, position: usize) -> Result<u32, ParseError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidExponent {
            position,
            token: token.to_owned(),
        });
    }
    // `-0` is still zero
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(ParseError::NegativeExponent {
            position,
            token: token.to_owned(),
        });
    }
    digits.parse().map_err(|_| ParseError::ExponentOutOfRange {
        position,
        token: token.to_owned(),
    })
}

impl<T: Coefficient, S: TermStore<T>> FromStr for SparsePoly<T, S> {
    type Err = Error;

    /// Same as [`SparsePoly::parse_pairs`].
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_pairs(s)
    }
}

#[cfg(test)]
mod test {
    use num::BigInt;

    use crate::{BigPoly, Error, ListPoly64, ParseError, Poly64, SparsePoly};

    #[test]
    fn pairs() {
        let p: Poly64 = "3 2 2 1 1 0".parse().unwrap();
        assert_eq!(p.to_string(), "3x^2 + 2x + 1");
        let q: ListPoly64 = "  -3 2\n5 0 ".parse().unwrap();
        assert_eq!(q.to_string(), "-3x^2 + 5");
    }

    #[test]
    fn pairs_empty() {
        assert!(Poly64::parse_pairs("").unwrap().is_empty());
        assert!(Poly64::parse_pairs("   ").unwrap().is_empty());
    }

    #[test]
    fn pairs_merge_like_terms() {
        let p = Poly64::parse_pairs("1 1 1 1 4 0 -4 0").unwrap();
        assert_eq!(p.to_vec(), vec![(2, 1)]);
    }

    #[test]
    fn counted() {
        let p = Poly64::parse_counted("3 3 2 2 1 1 0").unwrap();
        assert_eq!(p.to_string(), "3x^2 + 2x + 1");
        assert!(Poly64::parse_counted("0").unwrap().is_empty());
    }

    #[test]
    fn counted_errors() {
        assert_eq!(
            Poly64::parse_counted(""),
            Err(Error::Parse(ParseError::InvalidCount {
                token: String::new()
            }))
        );
        assert_eq!(
            Poly64::parse_counted("-1 2 3"),
            Err(Error::Parse(ParseError::InvalidCount {
                token: "-1".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_counted("2 1 1 5"),
            Err(Error::Parse(ParseError::Truncated {
                expected: 2,
                found: 1
            }))
        );
        assert_eq!(
            Poly64::parse_counted("1 1 1 5"),
            Err(Error::Parse(ParseError::TrailingInput {
                position: 3,
                token: "5".to_owned()
            }))
        );
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            Poly64::parse_pairs("3 2 x 1"),
            Err(Error::Parse(ParseError::InvalidCoefficient {
                position: 2,
                token: "x".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_pairs("3 2.5"),
            Err(Error::Parse(ParseError::InvalidExponent {
                position: 1,
                token: "2.5".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_counted("1 3 -2"),
            Err(Error::Parse(ParseError::NegativeExponent {
                position: 2,
                token: "-2".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_pairs("1 4294967296"),
            Err(Error::Parse(ParseError::ExponentOutOfRange {
                position: 1,
                token: "4294967296".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_pairs("1 --3"),
            Err(Error::Parse(ParseError::InvalidExponent {
                position: 1,
                token: "--3".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_pairs("1 2 3"),
            Err(Error::Parse(ParseError::Truncated {
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn exponents_beyond_i64() {
        assert_eq!(
            Poly64::parse_pairs("1 -99999999999999999999"),
            Err(Error::Parse(ParseError::NegativeExponent {
                position: 1,
                token: "-99999999999999999999".to_owned()
            }))
        );
        assert_eq!(
            Poly64::parse_pairs("1 99999999999999999999"),
            Err(Error::Parse(ParseError::ExponentOutOfRange {
                position: 1,
                token: "99999999999999999999".to_owned()
            }))
        );
        assert_eq!(Poly64::parse_pairs("4 -0 2 +1").unwrap().to_string(), "2x + 4");
    }

    #[test]
    fn overflow_while_merging() {
        assert_eq!(
            SparsePoly::<i8>::parse_pairs("100 0 100 0"),
            Err(Error::CoefficientOverflow { exponent: 0 })
        );
        // only the total has to fit
        assert_eq!(
            SparsePoly::<i8>::parse_pairs("100 0 100 0 -100 0").unwrap().coeff(0),
            100
        );
        // out of range for the type before any merging
        assert!(matches!(
            SparsePoly::<i8>::parse_pairs("300 0"),
            Err(Error::Parse(ParseError::InvalidCoefficient { .. }))
        ));
    }

    #[test]
    fn big_coefficients() {
        let p = BigPoly::parse_pairs("123456789012345678901234567890 1").unwrap();
        let c: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(p, BigPoly::term(c, 1));
    }
}
