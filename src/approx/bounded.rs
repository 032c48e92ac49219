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

use crate::codec;
use crate::error::Result;
use crate::fixed::Fixed;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::{debug, trace};

/// Extra decimal places carried on the first evaluation.
pub(crate) const GUARD_DIGITS: usize = 10;
/// Evaluations tried before settling for an uncertified result.
pub(crate) const MAX_ATTEMPTS: u32 = 4;

/// A value known to lie within `value ± error`, both counted in units
/// of 10<sup>−`prec`</sup>.
///
/// Binary operations first bring both operands to the larger
/// precision. Every rounding step widens the error, so the true result
/// always lies inside the interval.
#[derive(Clone, Debug)]
pub(crate) struct Bounded {
    value: BigInt,
    error: BigInt,
    prec: usize,
}

impl Bounded {
    #[inline]
    pub(crate) fn new(value: BigInt, error: BigInt, prec: usize) -> Bounded {
        Bounded { value, error, prec }
    }

    /// Truncates `x` to `prec` places; inexact values get an error of
    /// one unit.
    pub(crate) fn exact(x: &Rational, prec: usize) -> Bounded {
        let (value, rem) = (&x.numer * codec::pow10(prec)).div_rem(&x.denom);
        let error = if rem.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        };
        Bounded { value, error, prec }
    }

    /// Wraps a value which is the truncation of some real number at
    /// `f.scale()` places.
    #[inline]
    pub(crate) fn truncated(f: &Fixed) -> Bounded {
        Bounded {
            value: f.digits().clone(),
            error: BigInt::one(),
            prec: f.scale(),
        }
    }

    /// An interval wide enough never to certify a result.
    pub(crate) fn unbounded(prec: usize) -> Bounded {
        Bounded {
            value: BigInt::zero(),
            error: codec::pow10(prec + 1),
            prec,
        }
    }

    #[inline]
    pub(crate) fn prec(&self) -> usize {
        self.prec
    }

    #[inline]
    pub(crate) fn value(&self) -> &BigInt {
        &self.value
    }

    #[inline]
    pub(crate) fn error(&self) -> &BigInt {
        &self.error
    }

    /// Returns the centre of the interval.
    #[inline]
    pub(crate) fn to_rational(&self) -> Rational {
        Rational::reduced(self.value.clone(), codec::pow10(self.prec))
    }

    /// The largest magnitude inside the interval, in units.
    #[inline]
    pub(crate) fn magnitude(&self) -> BigInt {
        self.value.abs() + &self.error
    }

    /// The smallest value inside the interval, in units.
    #[inline]
    pub(crate) fn lower(&self) -> BigInt {
        &self.value - &self.error
    }

    /// Adds `extra` units of uncertainty.
    #[inline]
    pub(crate) fn widen(mut self, extra: &BigInt) -> Bounded {
        self.error += extra;
        self
    }

    /// Changes the precision; lowering it truncates the value.
    pub(crate) fn with_prec(&self, prec: usize) -> Bounded {
        if prec >= self.prec {
            let factor = codec::pow10(prec - self.prec);
            return Bounded {
                value: &self.value * &factor,
                error: &self.error * factor,
                prec,
            };
        }
        let factor = codec::pow10(self.prec - prec);
        Bounded {
            value: &self.value / &factor,
            error: Integer::div_ceil(&self.error, &factor) + 1u32,
            prec,
        }
    }

    pub(crate) fn mul_int(&self, k: &BigInt) -> Bounded {
        Bounded {
            value: &self.value * k,
            error: &self.error * k.abs(),
            prec: self.prec,
        }
    }

    // k must be positive
    pub(crate) fn div_int(&self, k: u32) -> Bounded {
        let k = BigInt::from(k);
        Bounded {
            value: &self.value / &k,
            error: Integer::div_ceil(&self.error, &k) + 1u32,
            prec: self.prec,
        }
    }

    /// Multiplies by an exact fraction.
    pub(crate) fn mul_ratio(&self, r: &Rational) -> Bounded {
        Bounded {
            value: &self.value * &r.numer / &r.denom,
            error: Integer::div_ceil(&(&self.error * r.numer.abs()), &r.denom) + 1u32,
            prec: self.prec,
        }
    }

    /// Returns the common truncation of every value in the interval at
    /// `digits` places, if there is one.
    pub(crate) fn truncate(&self, digits: usize) -> Option<Fixed> {
        if digits > self.prec {
            return if self.error.is_zero() {
                let digits_value = &self.value * codec::pow10(digits - self.prec);
                Some(Fixed::from_parts(digits_value, digits))
            } else {
                None
            };
        }
        let factor = codec::pow10(self.prec - digits);
        let low = (&self.value - &self.error) / &factor;
        let high = (&self.value + &self.error) / &factor;
        if low == high {
            Some(Fixed::from_parts(low, digits))
        } else {
            None
        }
    }

    /// Truncates the centre of the interval at `digits` places.
    pub(crate) fn best_effort(&self, digits: usize) -> Fixed {
        Fixed::from_parts(self.value.clone(), self.prec).trunc(digits)
    }
}

fn aligned(lhs: &Bounded, rhs: &Bounded) -> (Bounded, Bounded) {
    let prec = lhs.prec.max(rhs.prec);
    (lhs.with_prec(prec), rhs.with_prec(prec))
}

fn negate(val: &Bounded) -> Bounded {
    Bounded {
        value: -&val.value,
        error: val.error.clone(),
        prec: val.prec,
    }
}

fn sum(lhs: &Bounded, rhs: &Bounded) -> Bounded {
    let (a, b) = aligned(lhs, rhs);
    Bounded {
        value: a.value + b.value,
        error: a.error + b.error,
        prec: a.prec,
    }
}

fn difference(lhs: &Bounded, rhs: &Bounded) -> Bounded {
    sum(lhs, &negate(rhs))
}

fn product(lhs: &Bounded, rhs: &Bounded) -> Bounded {
    let (a, b) = aligned(lhs, rhs);
    let unit = codec::pow10(a.prec);
    let spread = a.value.abs() * &b.error + b.value.abs() * &a.error + &a.error * &b.error;
    Bounded {
        value: a.value * b.value / &unit,
        error: Integer::div_ceil(&spread, &unit) + 1u32,
        prec: a.prec,
    }
}

fn quotient(lhs: &Bounded, rhs: &Bounded) -> Bounded {
    let (a, b) = aligned(lhs, rhs);
    let divisor = b.value.abs();
    if divisor <= b.error {
        return Bounded::unbounded(a.prec);
    }
    let unit = codec::pow10(a.prec);
    let spread = (a.value.abs() * &b.error + &divisor * &a.error) * &unit;
    let margin = &divisor * (&divisor - &b.error);
    Bounded {
        value: a.value * unit / b.value,
        error: Integer::div_ceil(&spread, &margin) + 1u32,
        prec: a.prec,
    }
}

arith_unary! { Bounded; negate; Neg neg }
arith_binary! { Bounded; sum; Add add; AddAssign add_assign }
arith_binary! { Bounded; difference; Sub sub; SubAssign sub_assign }
arith_binary! { Bounded; product; Mul mul; MulAssign mul_assign }
arith_binary! { Bounded; quotient; Div div; DivAssign div_assign }

/// Evaluates at `digits` plus guard places until the interval pins
/// down the truncation at `digits` places.
///
/// Each retry roughly doubles the guard. After the last attempt the
/// centre of the final interval is truncated instead.
pub(crate) fn certify<F>(digits: usize, mut eval: F) -> Result<Fixed>
where
    F: FnMut(usize) -> Result<Bounded>,
{
    let mut guard = GUARD_DIGITS;
    let mut attempt = 1;
    loop {
        let bounded = eval(digits + guard)?;
        if let Some(res) = bounded.truncate(digits) {
            return Ok(res);
        }
        if attempt == MAX_ATTEMPTS {
            debug!(digits, guard, "result not certified, using best estimate");
            return Ok(bounded.best_effort(digits));
        }
        trace!(digits, guard, attempt, "retrying with more guard digits");
        attempt += 1;
        guard = guard * 2 + GUARD_DIGITS;
    }
}

#[cfg(test)]
mod tests {
    use super::{certify, Bounded};
    use crate::rational::Rational;
    use num_bigint::BigInt;
    use std::cell::Cell;

    fn rat(s: &str) -> Rational {
        s.parse().unwrap()
    }

    fn contains(b: &Bounded, x: &Rational) -> bool {
        let low = Rational::reduced(b.lower(), crate::codec::pow10(b.prec()));
        let high = Rational::reduced(b.value() + b.error(), crate::codec::pow10(b.prec()));
        low <= *x && *x <= high
    }

    #[test]
    fn check_exact() {
        let b = Bounded::exact(&rat("1/4"), 3);
        assert_eq!(*b.value(), BigInt::from(250));
        assert_eq!(*b.error(), BigInt::from(0));
        let b = Bounded::exact(&rat("-2/3"), 3);
        assert_eq!(*b.value(), BigInt::from(-666));
        assert_eq!(*b.error(), BigInt::from(1));
        assert!(contains(&b, &rat("-2/3")));
    }

    #[test]
    fn check_operations_contain_result() {
        let (x, y) = (rat("-2/3"), rat("5/7"));
        let (a, b) = (Bounded::exact(&x, 6), Bounded::exact(&y, 9));
        assert!(contains(&(&a + &b), &(&x + &y)));
        assert!(contains(&(&a - &b), &(&x - &y)));
        assert!(contains(&(&a * &b), &(&x * &y)));
        assert!(contains(&(&a / &b), &x.div(&y).unwrap()));
        assert!(contains(&(-&a), &(-&x)));
        assert!(contains(&a.div_int(7), &x.div(&Rational::from(7)).unwrap()));
        assert!(contains(&a.mul_ratio(&y), &(&x * &y)));
        assert!(contains(&a.with_prec(2), &x));
        assert!(contains(&a.with_prec(12), &x));
    }

    #[test]
    fn check_truncate() {
        let b = Bounded::new(BigInt::from(12_345), BigInt::from(6), 4);
        assert_eq!(b.truncate(2).unwrap().to_string(), "1.23");
        assert!(b.truncate(3).is_none());
        assert_eq!(b.best_effort(3).to_string(), "1.234");
        let b = Bounded::new(BigInt::from(-3), BigInt::from(5), 4);
        assert_eq!(b.truncate(3).unwrap().to_string(), "0");
        let b = Bounded::new(BigInt::from(5), BigInt::from(0), 1);
        assert_eq!(b.truncate(3).unwrap().to_string(), "0.5");
        let unstable = Bounded::exact(&rat("1"), 3) / Bounded::new(BigInt::from(1), BigInt::from(2), 3);
        assert!(unstable.truncate(0).is_none());
    }

    #[test]
    fn check_certify() {
        let calls = Cell::new(0);
        let res = certify(3, |prec| {
            calls.set(calls.get() + 1);
            // 1/3 known to within 10^(10 - prec)
            let spread = crate::codec::pow10(10);
            let third = Bounded::exact(&rat("1/3"), prec);
            Ok(third.widen(&spread))
        })
        .unwrap();
        assert_eq!(res.to_string(), "0.333");
        assert_eq!(calls.get(), 2);

        let res = certify(2, |prec| Ok(Bounded::unbounded(prec).widen(&BigInt::from(0))));
        assert_eq!(res.unwrap().to_string(), "0");
    }
}
