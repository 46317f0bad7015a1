use num::BigInt;
use sparse_poly::{poly, BigPoly, Error, ListPoly64, ParseError, Poly64, SparsePoly};

#[test]
fn format_polynomials() {
    let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
    assert_eq!(p.to_string(), "3x^2 + 2x + 1");

    let q: Poly64 = poly![(-3, 2), (5, 0)];
    assert_eq!(q.to_string(), "-3x^2 + 5");

    let empty = Poly64::from_terms(Vec::new()).unwrap();
    assert_eq!(empty.to_string(), "0");
}

#[test]
fn sum_of_opposite_leading_terms() {
    let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
    let q: Poly64 = poly![(-3, 2), (5, 0)];
    let r = &p + &q;
    assert_eq!(r, Poly64::from_terms([(2, 1), (6, 0)]).unwrap());
    assert_eq!(r.to_string(), "2x + 6");
}

#[test]
fn difference_of_squares() {
    let a: Poly64 = poly![(1, 1), (1, 0)];
    let b: Poly64 = poly![(1, 1), (-1, 0)];
    let c = &a * &b;
    assert_eq!(c, poly![(1, 2), (-1, 0)]);
    assert_eq!(c.to_string(), "1x^2 - 1");
    assert_eq!(format!("{c:#}"), "x^2 - 1");
}

#[test]
fn evaluate() {
    let p: Poly64 = poly![(3, 2), (2, 1), (1, 0)];
    assert_eq!(p.eval(2.0), 17.0);
}

/// The session of the demonstration driver, without the I/O.
#[test]
fn driver_session() {
    let p = Poly64::parse_counted("3 3 2 2 1 1 0").unwrap();
    let q = Poly64::parse_counted("2 -3 2 5 0").unwrap();
    assert_eq!((&p + &q).to_string(), "2x + 6");
    assert_eq!((&p - &q).to_string(), "6x^2 + 2x - 4");
    assert_eq!(
        (&p * &q).to_string(),
        "-9x^4 - 6x^3 + 12x^2 + 10x + 5"
    );
    assert_eq!(p.eval(1.5), 3.0 * 2.25 + 3.0 + 1.0);
    assert_eq!(q.eval(-2.0), -7.0);
}

#[test]
fn backends_agree() {
    let p: ListPoly64 = "3 2 2 1 1 0".parse().unwrap();
    let q: ListPoly64 = "-3 2 5 0".parse().unwrap();
    let pm: Poly64 = p.clone().into_store();
    let qm: Poly64 = q.clone().into_store();
    assert_eq!((&p * &q).to_vec(), (&pm * &qm).to_vec());
    assert_eq!((&p - &q).to_string(), (&pm - &qm).to_string());
}

#[test]
fn errors_are_recoverable() {
    let p = SparsePoly::<i32>::term(i32::MAX, 3);
    assert_eq!(
        p.try_add(&p),
        Err(Error::CoefficientOverflow { exponent: 3 })
    );
    // the operands are still usable afterwards
    assert_eq!(p.coeff(3), i32::MAX);

    let err = "1 -1".parse::<Poly64>().unwrap_err();
    assert_eq!(
        err,
        Error::Parse(ParseError::NegativeExponent {
            position: 1,
            token: "-1".to_owned()
        })
    );
    assert_eq!(err.to_string(), "negative exponent -1 at token 1");
}

#[test]
fn big_integers() {
    let p: BigPoly = "1 1 1 0".parse().unwrap();
    let p64 = p.pow(64);
    assert_eq!(p64.len(), 65);
    // binomial coefficient 64 choose 32
    let middle: BigInt = "1832624140942590534".parse().unwrap();
    assert_eq!(p64.coeff(32), middle);
    assert!((&p64 - &p64).is_zero());
}
