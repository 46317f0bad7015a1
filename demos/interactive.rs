//! Reads two polynomials from stdin, prints their sum, difference and
//! product, then evaluates each at a point read from stdin.
//!
//! Polynomials are entered as a term count followed by that many
//! `coefficient exponent` pairs, all on one line:
//!
//! ```text
//! insert p: 3 3 2 2 1 1 0
//! insert q: 2 -3 2 5 0
//! p(x) = 3x^2 + 2x + 1
//! q(x) = -3x^2 + 5
//! p + q = 2x + 6
//! ...
//! ```
//!
//! Set `RUST_LOG=debug` to see what the parser did.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use sparse_poly::Poly64;

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, msg: &str) -> Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => bail!("unexpected end of input"),
    }
}

fn read_poly(lines: &mut impl Iterator<Item = io::Result<String>>, name: &str) -> Result<Poly64> {
    let line = prompt(lines, &format!("insert {name}: "))?;
    Poly64::parse_counted(&line).with_context(|| format!("could not read {name}"))
}

fn read_point(lines: &mut impl Iterator<Item = io::Result<String>>, name: &str) -> Result<f64> {
    let line = prompt(lines, &format!("insert x for {name}: "))?;
    line.trim()
        .parse()
        .with_context(|| format!("`{}` is not a number", line.trim()))
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let p = read_poly(&mut lines, "p")?;
    let q = read_poly(&mut lines, "q")?;

    println!("p(x) = {p}");
    println!("q(x) = {q}");

    match p.try_add(&q) {
        Ok(r) => println!("p + q = {r}"),
        Err(e) => println!("p + q: {e}"),
    }
    match p.try_sub(&q) {
        Ok(r) => println!("p - q = {r}"),
        Err(e) => println!("p - q: {e}"),
    }
    match p.try_mul(&q) {
        Ok(r) => println!("p * q = {r}"),
        Err(e) => println!("p * q: {e}"),
    }

    let x = read_point(&mut lines, "p")?;
    println!("p({x}) = {}", p.eval(x));
    let x = read_point(&mut lines, "q")?;
    println!("q({x}) = {}", q.eval(x));

    Ok(())
}
