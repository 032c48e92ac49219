// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

use crate::approx::bounded::{self, Bounded};
use crate::approx::roots;
use crate::approx::series::{self, OddPowers};
use crate::approx::Engine;
use crate::codec;
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use az::{Az, CheckedAs};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::f64::consts::LN_10;

// ln(1.1), below which no more square roots are taken
const REDUCED_LN: f64 = 0.0953;

fn invalid() -> Error {
    Error::new(ErrorKind::InvalidParameter)
}

// Square roots needed to bring x >= 1 to 1.1, overestimated.
fn reductions_needed(x: &Rational) -> usize {
    let digits = codec::count_digits(x.int_part().digits());
    let ln_upper = (digits.az::<f64>() + 1.0) * LN_10;
    (ln_upper / REDUCED_LN)
        .log2()
        .ceil()
        .checked_as::<usize>()
        .unwrap_or(0)
}

/// Computes ln(x) for `x > 0`.
///
/// Square roots bring `x` down to at most 1.1, where
/// `ln(x) = 2·atanh((x − 1)/(x + 1))` converges quickly; the result is
/// scaled by 2 for every root taken.
pub(crate) fn ln_bounded(x: &Rational, prec: usize) -> Result<Bounded> {
    if !x.is_positive() {
        return Err(invalid());
    }
    let one = Rational::from(1);
    if *x == one {
        return Ok(Bounded::exact(&Rational::new(), prec));
    }
    if *x < one {
        return Ok(-ln_bounded(&x.inv()?, prec)?);
    }
    let limit = Rational::from_parts_unchecked(BigInt::from(11), BigInt::from(10));
    let work = prec + reductions_needed(x) + 3;
    let mut root = x.clone();
    let mut reductions = 0_usize;
    while root > limit {
        root = roots::root_trunc(&root, 2, work).to_rational();
        reductions += 1;
    }
    // Each root is truncated; the errors shrink through later roots to
    // at most two units, and atanh((r − 1)/(r + 1)) = ln(r)/2 halves them.
    let input_error = if reductions > 0 {
        BigInt::one()
    } else {
        BigInt::zero()
    };
    let y = (&root - &one).div(&(&root + &one))?;
    let half_ln = series::sum_series(OddPowers::atanh(&y), work).widen(&input_error);
    Ok(half_ln.mul_int(&(BigInt::one() << (reductions + 1))))
}

/// Computes ln(z) for an interval whose values are positive.
pub(crate) fn ln_of(z: &Bounded, prec: usize) -> Result<Bounded> {
    let lower = z.lower();
    if !lower.is_positive() {
        return Ok(Bounded::unbounded(prec));
    }
    let res = ln_bounded(&z.to_rational(), prec)?;
    // |ln a − ln b| <= |a − b| / min(a, b)
    let spread = z.error() * codec::pow10(res.prec());
    let extra = Integer::div_ceil(&spread, &lower);
    Ok(res.widen(&extra))
}

// Continued fraction steps tried before a logarithm is taken as
// irrational.
const MAX_LOG_STEPS: u32 = 64;

/// Returns `p/q` when `x^q` is exactly `base^p`; `base` must be
/// positive and not one.
///
/// The logarithm is expanded as a continued fraction,
/// log<sub>b</sub> x = k + 1 / log<sub>x/b^k</sub> b, which ends exactly
/// when the logarithm is rational.
pub(crate) fn exact_log(base: &Rational, x: &Rational) -> Option<Rational> {
    let one = Rational::from(1);
    if !x.is_positive() {
        return None;
    }
    if *base < one {
        return exact_log(&base.inv().ok()?, x).map(|r| -r);
    }
    if *x < one {
        return exact_log(base, &x.inv().ok()?).map(|r| -r);
    }
    log_expansion(base, x, 0)
}

// base > 1 and x >= 1
fn log_expansion(base: &Rational, x: &Rational, steps: u32) -> Option<Rational> {
    if x.is_one() {
        return Some(Rational::new());
    }
    if steps == MAX_LOG_STEPS {
        return None;
    }
    // a rational logarithm has x = r^m for some r > 1 with m <= k, and
    // the numerator of r is at least 2
    let limit = x.numer.bits();
    let mut power = Rational::from(1);
    let mut k = 0_u64;
    loop {
        let next = &power * base;
        if next > *x {
            break;
        }
        power = next;
        k += 1;
        if k > limit {
            return None;
        }
    }
    let whole = Rational::from(k);
    if power == *x {
        return Some(whole);
    }
    // 1 < rest < base, so the inner logarithm exceeds one
    let rest = x.div(&power).ok()?;
    let inner = log_expansion(&rest, base, steps + 1)?;
    Some(&whole + &inner.inv().ok()?)
}

fn positive<X>(x: X) -> Result<Rational>
where
    X: IntoNumber,
{
    let x = x.into_number()?.to_rational();
    if x.is_positive() {
        Ok(x)
    } else {
        Err(invalid())
    }
}

impl Engine {
    pub(crate) fn ln2_bounded(&self, prec: usize) -> Result<Bounded> {
        Ok(Bounded::truncated(&self.ln2.get(prec)?))
    }

    pub(crate) fn ln10_bounded(&self, prec: usize) -> Result<Bounded> {
        Ok(Bounded::truncated(&self.ln10.get(prec)?))
    }

    /// Computes the natural logarithm, truncated at `digits` places.
    ///
    /// Fails with [`InvalidParameter`](../enum.ErrorKind.html) unless
    /// `x > 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.ln(2, 10).unwrap().to_string(), "0.6931471805");
    /// assert!(engine.ln(0, 10).is_err());
    /// ```
    pub fn ln<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = positive(x)?;
        bounded::certify(digits, |prec| ln_bounded(&x, prec))
    }

    /// Computes the logarithm of `x` to the given `base`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.logn(3, 81, 10).unwrap().to_string(), "4");
    /// assert_eq!(engine.logn(3, 10, 10).unwrap().to_string(), "2.0959032742");
    /// ```
    pub fn logn<B, X>(&self, base: B, x: X, digits: usize) -> Result<Fixed>
    where
        B: IntoNumber,
        X: IntoNumber,
    {
        let base = positive(base)?;
        let x = positive(x)?;
        if base.is_one() {
            return Err(invalid());
        }
        if let Some(res) = exact_log(&base, &x) {
            return Ok(res.trunc(digits));
        }
        bounded::certify(digits, |prec| {
            Ok(ln_bounded(&x, prec)? / ln_bounded(&base, prec)?)
        })
    }

    /// Computes the base 2 logarithm using the cached ln 2.
    pub fn log2<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = positive(x)?;
        if let Some(res) = exact_log(&Rational::from(2), &x) {
            return Ok(res.trunc(digits));
        }
        bounded::certify(digits, |prec| {
            Ok(ln_bounded(&x, prec)? / self.ln2_bounded(prec)?)
        })
    }

    /// Computes the base 10 logarithm using the cached ln 10.
    pub fn log10<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = positive(x)?;
        if let Some(res) = exact_log(&Rational::from(10), &x) {
            return Ok(res.trunc(digits));
        }
        bounded::certify(digits, |prec| {
            Ok(ln_bounded(&x, prec)? / self.ln10_bounded(prec)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{exact_log, ln_bounded};
    use crate::approx::Engine;
    use crate::error::ErrorKind;
    use crate::rational::Rational;

    fn rat(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn check_ln() {
        let engine = Engine::new();
        let ln2 = engine.ln(2, 20).unwrap();
        assert_eq!(ln2.to_string(), "0.69314718055994530941");
        assert_eq!(engine.ln(10, 15).unwrap().to_string(), "2.302585092994045");
        assert_eq!(engine.ln("0.5", 10).unwrap().to_string(), "-0.6931471805");
        assert_eq!(engine.ln(1, 10).unwrap().to_string(), "0");
        assert_eq!(engine.ln("1.05", 12).unwrap().to_string(), "0.048790164169");
        let big = engine.ln("1e100", 10).unwrap();
        assert_eq!(big.to_string(), "230.2585092994");
        for &bad in ["0", "-1", "-1/3"].iter() {
            let err = engine.ln(bad, 10).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn check_ln_bounded_precision() {
        let b = ln_bounded(&rat("7"), 30).unwrap();
        assert!(b.prec() >= 30);
        let t = b.truncate(25).unwrap();
        assert_eq!(t.to_string(), "1.9459101490553133051053527");
        let b = ln_bounded(&rat("1/7"), 30).unwrap();
        assert_eq!(b.truncate(25).unwrap().to_string(), "-1.9459101490553133051053527");
    }

    #[test]
    fn check_exact_log() {
        let log = |b: &str, x: &str| exact_log(&rat(b), &rat(x)).map(|r| r.to_fraction());
        assert_eq!(log("2", "1024").as_deref(), Some("10/1"));
        assert_eq!(log("2", "0.125").as_deref(), Some("-3/1"));
        assert_eq!(log("1/3", "9").as_deref(), Some("-2/1"));
        assert_eq!(log("2/3", "8/27").as_deref(), Some("3/1"));
        assert_eq!(log("10", "1").as_deref(), Some("0/1"));
        assert_eq!(log("4", "8").as_deref(), Some("3/2"));
        assert_eq!(log("8", "4").as_deref(), Some("2/3"));
        assert_eq!(log("1/4", "8").as_deref(), Some("-3/2"));
        assert_eq!(log("9", "1/27").as_deref(), Some("-3/2"));
        assert_eq!(log("32", "8").as_deref(), Some("3/5"));
        assert_eq!(log("100", "1000").as_deref(), Some("3/2"));
        assert_eq!(log("10", "99"), None);
        assert_eq!(log("2", "3"), None);
        assert_eq!(log("1.0001", "2"), None);
        assert_eq!(log("2", "-8"), None);
    }

    #[test]
    fn check_rational_logs() {
        let engine = Engine::new();
        assert_eq!(engine.logn(4, 8, 10).unwrap().to_string(), "1.5");
        assert_eq!(engine.logn(8, 4, 10).unwrap().to_string(), "0.6666666666");
        assert_eq!(engine.logn(16, 2, 10).unwrap().to_string(), "0.25");
        assert_eq!(engine.logn("1/4", 8, 10).unwrap().to_string(), "-1.5");
        assert_eq!(engine.log10("0.01", 3).unwrap().to_string(), "-2");
        assert_eq!(engine.log2("1/32", 3).unwrap().to_string(), "-5");
        let long = engine.logn(4, 8, 40).unwrap();
        for &d in [0, 1, 5, 20].iter() {
            assert_eq!(engine.logn(4, 8, d).unwrap(), long.trunc(d), "{}", d);
        }
    }

    #[test]
    fn check_logs() {
        let engine = Engine::new();
        assert_eq!(engine.log10(1000, 10).unwrap().to_string(), "3");
        assert_eq!(engine.log10("0.001", 10).unwrap().to_string(), "-3");
        assert_eq!(engine.log10(2, 15).unwrap().to_string(), "0.301029995663981");
        assert_eq!(engine.log2("0.125", 10).unwrap().to_string(), "-3");
        assert_eq!(engine.log2(10, 10).unwrap().to_string(), "3.3219280948");
        assert_eq!(engine.logn(3, 81, 10).unwrap().to_string(), "4");
        assert_eq!(engine.logn("0.5", 3, 10).unwrap().to_string(), "-1.5849625007");
        let err = engine.logn(1, 3, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        let err = engine.log2(-8, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}
