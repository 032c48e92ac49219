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
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::One;

fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::from_parts_unchecked(BigInt::from(numer), BigInt::from(denom))
}

/// Computes atan(z).
///
/// While `|z| > 0.42` it is replaced by `z / (1 + √(1 + z²))`, which
/// halves the angle; at most two steps are ever needed. The series
/// result is doubled back once per step.
pub(crate) fn atan_bounded(z: &Bounded) -> Bounded {
    let limit = ratio(21, 50);
    let one = Bounded::exact(&Rational::from(1), z.prec());
    let mut y = z.clone();
    let mut halvings = 0_usize;
    while y.to_rational().abs() > limit {
        let root = roots::sqrt_bounded(&(&one + &(&y * &y)));
        y = &y / &(&one + &root);
        halvings += 1;
    }
    // atan has slope at most one
    series::sum_series(OddPowers::atan(&y.to_rational()), y.prec())
        .widen(y.error())
        .mul_int(&(BigInt::one() << halvings))
}

fn out_of_range() -> Error {
    Error::new(ErrorKind::OutOfRange)
}

impl Engine {
    fn half_pi_bounded(&self, prec: usize) -> Result<Bounded> {
        Ok(self.pi_bounded(prec)?.div_int(2))
    }

    // x must lie in [-1, 1]
    fn asin_bounded(&self, x: &Rational, prec: usize) -> Result<Bounded> {
        let magnitude = x.abs();
        let res = if magnitude.is_one() {
            self.half_pi_bounded(prec)?
        } else if magnitude == ratio(1, 2) {
            self.pi_bounded(prec)?.div_int(6)
        } else {
            let one = Rational::from(1);
            let cos = roots::root_trunc(&(&one - &(&magnitude * &magnitude)), 2, prec);
            let denom = Bounded::exact(&one, prec) + Bounded::truncated(&cos);
            let z = Bounded::exact(&magnitude, prec) / denom;
            atan_bounded(&z).mul_int(&BigInt::from(2))
        };
        Ok(if x.is_negative() { -res } else { res })
    }

    /// Computes the arctangent, truncated at `digits` places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.atan(1, 10).unwrap().to_string(), "0.7853981633");
    /// ```
    pub fn atan<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.is_zero() {
            return Ok(Fixed::new());
        }
        bounded::certify(digits, |prec| Ok(atan_bounded(&Bounded::exact(&x, prec))))
    }

    /// Computes the arcsine.
    ///
    /// Fails with [`OutOfRange`](../enum.ErrorKind.html) when
    /// `|x| > 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.asin("0.5", 10).unwrap().to_string(), "0.5235987755");
    /// assert!(engine.asin(2, 10).is_err());
    /// ```
    pub fn asin<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.abs() > Rational::from(1) {
            return Err(out_of_range());
        }
        if x.is_zero() {
            return Ok(Fixed::new());
        }
        bounded::certify(digits, |prec| self.asin_bounded(&x, prec))
    }

    /// Computes the arccosine as π/2 − asin(x).
    pub fn acos<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.abs() > Rational::from(1) {
            return Err(out_of_range());
        }
        if x.is_one() {
            return Ok(Fixed::new());
        }
        bounded::certify(digits, |prec| {
            Ok(self.half_pi_bounded(prec)? - self.asin_bounded(&x, prec)?)
        })
    }
}
