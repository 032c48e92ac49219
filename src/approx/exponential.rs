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
use crate::approx::logarithm;
use crate::approx::roots;
use crate::approx::series::{self, Taylor};
use crate::approx::Engine;
use crate::codec;
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use az::CheckedAs;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use std::f64::consts::LOG10_E;

// Largest denominator of an exponent computed as an exact root.
const MAX_ROOT_DEGREE: u32 = 16;
// Largest numerator of an exponent computed as an exact root.
const MAX_ROOT_POWER: u64 = 64;
// Largest size of an exact power of a rational root.
const MAX_EXACT_POWER_BITS: u64 = 1 << 20;

// Decimal digits in the integer part of e^x, overestimated.
fn integer_digits(x: &Rational) -> Result<usize> {
    if !x.is_positive() {
        return Ok(0);
    }
    (x.to_f64() * LOG10_E)
        .ceil()
        .checked_as::<usize>()
        .map(|d| d + 1)
        .ok_or_else(|| Error::new(ErrorKind::UnsupportedParameter))
}

/// Computes e<sup>x</sup>.
///
/// The argument is halved until it is at most ½, and the series result
/// squared back. The precision is raised by the number of integer
/// digits of the result and one place per squaring.
pub(crate) fn exp_bounded(x: &Rational, prec: usize) -> Result<Bounded> {
    if x.is_zero() {
        return Ok(Bounded::exact(&Rational::from(1), prec));
    }
    let half = Rational::from_parts_unchecked(BigInt::one(), BigInt::from(2));
    let mut reduced = x.clone();
    let mut halvings = 0_usize;
    while reduced.abs() > half {
        reduced = Rational::reduced(reduced.numer.clone(), &reduced.denom * 2u32);
        halvings += 1;
    }
    let work = prec + integer_digits(x)? + halvings + 2;
    let mut res = series::sum_series(Taylor::exp(&reduced), work);
    for _ in 0..halvings {
        res = &res * &res;
    }
    Ok(res)
}

/// Computes e<sup>m</sup> for an approximate exponent, which must be
/// known to within ½.
pub(crate) fn exp_of(m: &Bounded, prec: usize) -> Result<Bounded> {
    let unit = codec::pow10(m.prec());
    let res = exp_bounded(&m.to_rational(), prec)?;
    if m.error() * 2u32 > unit {
        return Ok(Bounded::unbounded(res.prec()));
    }
    // |e^a − e^b| <= 2·e^b·|a − b| while |a − b| <= ½
    let spread = res.magnitude() * m.error() * 2u32;
    let extra = Integer::div_ceil(&spread, &unit);
    Ok(res.widen(&extra))
}

// Digits in the integer part of e^m.
fn bounded_integer_digits(m: &Bounded) -> Result<usize> {
    let int = m.value() / codec::pow10(m.prec());
    integer_digits(&Rational::from(int))
}

// b^(p/q) as an exact root when q and p are small.
fn small_root(base: &Rational, exp: &Rational, digits: usize) -> Result<Option<Fixed>> {
    let degree = match exp.denom.to_u32() {
        Some(q) if q <= MAX_ROOT_DEGREE => q,
        _ => return Ok(None),
    };
    let power = match exp.numer.to_i64() {
        Some(p) if p.unsigned_abs() <= MAX_ROOT_POWER => p,
        _ => return Ok(None),
    };
    let radicand = base.pow(power)?;
    Ok(Some(roots::root_trunc(&radicand, degree, digits)))
}

// b^(p/q) when b is a perfect q-th power, for a positive b.
fn exact_power(base: &Rational, exp: &Rational) -> Result<Option<Rational>> {
    let (degree, power) = match (exp.denom.to_u32(), exp.numer.to_i64()) {
        (Some(q), Some(p)) => (q, p),
        _ => return Ok(None),
    };
    let root = match roots::exact_root(base, degree) {
        Some(root) => root,
        None => return Ok(None),
    };
    let bits = root.numer.bits().max(root.denom.bits());
    if bits.saturating_mul(power.unsigned_abs()) > MAX_EXACT_POWER_BITS {
        return Ok(None);
    }
    root.pow(power).map(Some)
}

impl Engine {
    /// Computes e<sup>x</sup>, truncated at `digits` places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.exp(1, 15).unwrap().to_string(), "2.718281828459045");
    /// assert_eq!(engine.exp(0, 15).unwrap().to_string(), "1");
    /// ```
    pub fn exp<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.is_zero() {
            return Ok(Fixed::from(1));
        }
        bounded::certify(digits, |prec| exp_bounded(&x, prec))
    }

    /// Computes `base` raised to `exp`, truncated at `digits` places.
    ///
    /// Integer exponents are evaluated exactly, as are exponents `p/q`
    /// when `base` is a perfect `q`-th power. Other exponents `p/q` with
    /// small `p` and `q` give the truncated `q`-th root of `base^p`.
    /// Other exponents go through e<sup>exp·ln(base)</sup>.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// use exactnum::ErrorKind;
    /// let engine = Engine::new();
    /// assert_eq!(engine.pow(2, -3, 5).unwrap().to_string(), "0.125");
    /// assert_eq!(engine.pow(4, "1.5", 5).unwrap().to_string(), "8");
    /// let err = engine.pow(-8, "1/3", 5).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ComplexResult);
    /// ```
    pub fn pow<B, E>(&self, base: B, exp: E, digits: usize) -> Result<Fixed>
    where
        B: IntoNumber,
        E: IntoNumber,
    {
        let base = base.into_number()?.to_rational();
        let exp = exp.into_number()?;
        if exp.is_integer() {
            let exp = exp.safe_integer()?;
            return Ok(base.pow(exp)?.trunc(digits));
        }
        let exp = exp.to_rational();
        if base.is_negative() {
            return Err(Error::new(ErrorKind::ComplexResult));
        }
        if base.is_zero() {
            return if exp.is_negative() {
                Err(Error::new(ErrorKind::DivisionByZero))
            } else {
                Ok(Fixed::new())
            };
        }
        if let Some(res) = exact_power(&base, &exp)? {
            return Ok(res.trunc(digits));
        }
        if let Some(root) = small_root(&base, &exp, digits)? {
            return Ok(root);
        }
        // places lost when the logarithm is scaled by the exponent
        let lift = codec::count_digits(exp.int_part().digits());
        bounded::certify(digits, |prec| {
            let log = logarithm::ln_bounded(&base, prec + lift)?.mul_ratio(&exp);
            let extra = bounded_integer_digits(&log)?;
            let log = if extra > 0 {
                logarithm::ln_bounded(&base, prec + lift + extra)?.mul_ratio(&exp)
            } else {
                log
            };
            exp_of(&log, prec)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::exp_bounded;
    use crate::approx::Engine;
    use crate::error::ErrorKind;
    use crate::fixed::Fixed;
    use crate::rational::Rational;

    #[test]
    fn check_exp() {
        let engine = Engine::new();
        let e = engine.exp(1, 20).unwrap();
        assert_eq!(e.to_string(), "2.71828182845904523536");
        assert_eq!(engine.exp(-1, 10).unwrap().to_string(), "0.3678794411");
        assert_eq!(engine.exp("0.001", 12).unwrap().to_string(), "1.001000500166");
        assert_eq!(engine.exp(10, 5).unwrap().to_string(), "22026.46579");
        assert_eq!(engine.exp(-20, 12).unwrap().to_string(), "0.000000002061");
        let big = engine.exp(230, 2).unwrap();
        assert!(big.to_string().starts_with("77220184999838357"));
    }

    #[test]
    fn check_exp_bounded_halves() {
        let x: Rational = "3".parse().unwrap();
        let b = exp_bounded(&x, 20).unwrap();
        assert!(b.prec() > 20);
        assert_eq!(b.truncate(10).unwrap().to_string(), "20.0855369231");
    }

    #[test]
    fn check_pow() {
        let engine = Engine::new();
        assert_eq!(engine.pow(2, 10, 0).unwrap().to_string(), "1024");
        assert_eq!(engine.pow("2/3", -2, 3).unwrap().to_string(), "2.25");
        assert_eq!(engine.pow("1/3", 2, 4).unwrap().to_string(), "0.1111");
        let root_two: Fixed = "1.41421356237309504880".parse().unwrap();
        assert_eq!(engine.pow(2, "0.5", 20).unwrap(), root_two);
        assert_eq!(engine.pow(2, "0.3", 10).unwrap().to_string(), "1.2311444133");
        assert_eq!(engine.pow(3, "1.234", 10).unwrap().to_string(), "3.8794273953");
        assert_eq!(engine.pow(10, "0.0001", 10).unwrap().to_string(), "1.000230285");
        assert_eq!(engine.pow(0, "0.5", 10).unwrap().to_string(), "0");
        let err = engine.pow(0, "-0.5", 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        let err = engine.pow(0, -1, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        let err = engine.pow("-2", "0.25", 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ComplexResult);
    }

    #[test]
    fn check_exact_powers() {
        let engine = Engine::new();
        assert_eq!(engine.pow(131_072, "3/17", 10).unwrap().to_string(), "8");
        assert_eq!(engine.pow(1_099_511_627_776_i64, "1/40", 10).unwrap().to_string(), "2");
        assert_eq!(engine.pow("1/1024", "-0.7", 10).unwrap().to_string(), "128");
        assert_eq!(engine.pow("0.0625", "0.75", 10).unwrap().to_string(), "0.125");
        assert_eq!(engine.pow(1, "0.123", 10).unwrap().to_string(), "1");
        let long = engine.pow("6.25", "0.5", 30).unwrap();
        assert_eq!(long.to_string(), "2.5");
        assert_eq!(engine.pow("6.25", "0.5", 0).unwrap().to_string(), "2");
    }
}
