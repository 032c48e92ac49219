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
use crate::approx::Engine;
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;

fn out_of_range() -> Error {
    Error::new(ErrorKind::OutOfRange)
}

// ln(x + √(x² + sign)) for x >= 1, or x >= 0 when sign is +1
fn ln_hypot(x: &Rational, sign: i64, prec: usize) -> Result<Bounded> {
    let radicand = &(x * x) + &Rational::from(sign);
    let root = roots::root_trunc(&radicand, 2, prec);
    let z = Bounded::exact(x, prec) + Bounded::truncated(&root);
    logarithm::ln_of(&z, prec)
}

impl Engine {
    /// Computes the inverse hyperbolic sine as ln(x + √(x² + 1)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.asinh(1, 10).unwrap().to_string(), "0.881373587");
    /// ```
    pub fn asinh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.is_zero() {
            return Ok(Fixed::new());
        }
        let magnitude = x.abs();
        let res = bounded::certify(digits, |prec| ln_hypot(&magnitude, 1, prec))?;
        Ok(if x.is_negative() { -res } else { res })
    }

    /// Computes the inverse hyperbolic cosine as ln(x + √(x² − 1)).
    ///
    /// Fails with [`OutOfRange`](../enum.ErrorKind.html) when `x < 1`.
    pub fn acosh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        let one = Rational::from(1);
        if x < one {
            return Err(out_of_range());
        }
        if x == one {
            return Ok(Fixed::new());
        }
        bounded::certify(digits, |prec| ln_hypot(&x, -1, prec))
    }

    /// Computes the inverse hyperbolic tangent as
    /// ½·ln((1 + x) / (1 − x)).
    ///
    /// Fails with [`OutOfRange`](../enum.ErrorKind.html) when
    /// `|x| >= 1`.
    pub fn atanh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        let one = Rational::from(1);
        if x.abs() >= one {
            return Err(out_of_range());
        }
        if x.is_zero() {
            return Ok(Fixed::new());
        }
        let ratio = (&one + &x).div(&(&one - &x))?;
        bounded::certify(digits, |prec| {
            Ok(logarithm::ln_bounded(&ratio, prec)?.div_int(2))
        })
    }
}
