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

use crate::error::Error;
use crate::fixed::Fixed;
use crate::number::Number;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Number::Fixed(val) => Display::fmt(val, f),
            Number::Rational(val) => Display::fmt(val, f),
        }
    }
}

impl Debug for Number {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Number {
    type Err = Error;
    fn from_str(src: &str) -> Result<Number, Error> {
        if src.contains('/') || src.contains('(') {
            src.parse().map(Number::Rational)
        } else {
            src.parse().map(Number::Fixed)
        }
    }
}

impl From<BigInt> for Number {
    #[inline]
    fn from(val: BigInt) -> Number {
        Number::Fixed(Fixed::from(val))
    }
}

from_prims! { Number; Number::from }

impl TryFrom<Number> for Fixed {
    type Error = Error;
    /// Converts a number whose decimal expansion terminates.
    fn try_from(val: Number) -> Result<Fixed, Error> {
        match val {
            Number::Fixed(f) => Ok(f),
            Number::Rational(r) => Fixed::try_from(r),
        }
    }
}

impl From<Number> for Rational {
    #[inline]
    fn from(val: Number) -> Rational {
        match val {
            Number::Fixed(f) => f.to_rational(),
            Number::Rational(r) => r,
        }
    }
}

impl Default for Number {
    #[inline]
    fn default() -> Number {
        Number::Fixed(Fixed::new())
    }
}

impl Zero for Number {
    #[inline]
    fn zero() -> Number {
        Number::Fixed(Fixed::new())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl One for Number {
    #[inline]
    fn one() -> Number {
        Number::Fixed(Fixed::one())
    }
}

impl Number {
    /// Converts into a fixed-point number if the decimal expansion
    /// terminates.
    #[inline]
    pub fn into_fixed(self) -> Result<Fixed, Error> {
        Fixed::try_from(self)
    }
}
