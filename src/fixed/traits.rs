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
use crate::error::{Error, ErrorKind};
use crate::fixed::Fixed;
use crate::rational::Rational;
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let n = self.normalize();
        let s = codec::format_decimal(&n.digits, n.scale, 0);
        f.pad_integral(!n.is_negative(), "", s.trim_start_matches('-'))
    }
}

impl Debug for Fixed {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Fixed {
    type Err = Error;
    #[inline]
    fn from_str(src: &str) -> Result<Fixed, Error> {
        let (digits, scale) = codec::parse_decimal(src)?;
        Ok(Fixed::from_parts(digits, scale))
    }
}

from_prims! { Fixed; Fixed::from }

impl<'a> TryFrom<&'a Rational> for Fixed {
    type Error = Error;
    /// Converts a fraction whose decimal expansion terminates.
    fn try_from(val: &'a Rational) -> Result<Fixed, Error> {
        val.to_terminating()
            .ok_or_else(|| Error::new(ErrorKind::NonIntegerFraction))
    }
}

impl TryFrom<Rational> for Fixed {
    type Error = Error;
    #[inline]
    fn try_from(val: Rational) -> Result<Fixed, Error> {
        Fixed::try_from(&val)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::fixed::Fixed;
    use crate::rational::Rational;
    use std::convert::TryFrom;

    #[test]
    fn check_display() {
        let f: Fixed = "-0012.3400".parse().unwrap();
        assert_eq!(f.to_string(), "-12.34");
        assert_eq!(format!("{:>8}", f), "  -12.34");
        assert_eq!(format!("{:+}", Fixed::from(3)), "+3");
        assert_eq!(format!("{:?}", Fixed::from(-7)), "-7");
        assert_eq!("-0".parse::<Fixed>().unwrap().to_string(), "0");
    }

    #[test]
    fn check_from_rational() {
        let r: Rational = "3/8".parse().unwrap();
        assert_eq!(Fixed::try_from(&r).unwrap().to_string(), "0.375");
        let r: Rational = "1/3".parse().unwrap();
        let err = Fixed::try_from(r).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegerFraction);
    }
}
