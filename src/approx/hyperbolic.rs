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
use crate::approx::exponential;
use crate::approx::series::{self, Taylor};
use crate::approx::Engine;
use crate::error::Result;
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;

// Beyond |x| = 1 the exponential form converges faster.
fn small(x: &Rational) -> bool {
    x.abs() <= Rational::from(1)
}

pub(crate) fn sinh_bounded(x: &Rational, prec: usize) -> Result<Bounded> {
    if small(x) {
        return Ok(series::sum_series(Taylor::sinh(x), prec));
    }
    let (up, down) = (
        exponential::exp_bounded(x, prec)?,
        exponential::exp_bounded(&-x, prec)?,
    );
    Ok((up - down).div_int(2))
}

pub(crate) fn cosh_bounded(x: &Rational, prec: usize) -> Result<Bounded> {
    if small(x) {
        return Ok(series::sum_series(Taylor::cosh(x), prec));
    }
    let (up, down) = (
        exponential::exp_bounded(x, prec)?,
        exponential::exp_bounded(&-x, prec)?,
    );
    Ok((up + down).div_int(2))
}

impl Engine {
    /// Computes the hyperbolic sine, truncated at `digits` places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.sinh(1, 10).unwrap().to_string(), "1.1752011936");
    /// ```
    pub fn sinh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        bounded::certify(digits, |prec| sinh_bounded(&x, prec))
    }

    /// Computes the hyperbolic cosine.
    pub fn cosh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.is_zero() {
            return Ok(Fixed::from(1));
        }
        bounded::certify(digits, |prec| cosh_bounded(&x, prec))
    }

    /// Computes the hyperbolic tangent as sinh(x) / cosh(x).
    pub fn tanh<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        let x = x.into_number()?.to_rational();
        if x.is_zero() {
            return Ok(Fixed::new());
        }
        bounded::certify(digits, |prec| {
            Ok(sinh_bounded(&x, prec)? / cosh_bounded(&x, prec)?)
        })
    }
}
