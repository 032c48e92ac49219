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
use crate::rational::Rational;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = self.to_repeating_digits(None);
        f.pad_integral(!self.is_negative(), "", s.trim_start_matches('-'))
    }
}

impl Debug for Rational {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Rational {
    type Err = Error;
    /// Parses `a` or `a/b`, where both parts may be decimals with a
    /// repeating group and an exponent.
    fn from_str(src: &str) -> Result<Rational, Error> {
        let parts: Vec<&str> = src.split('/').collect();
        match parts[..] {
            [whole] => {
                let (numer, denom) = codec::parse_ratio(whole)?;
                Rational::from_ratio(numer, denom)
            }
            [top, bottom] => {
                let (n1, d1) = codec::parse_ratio(top)?;
                let (n2, d2) = codec::parse_ratio(bottom)?;
                Rational::from_ratio(n1 * d2, d1 * n2)
            }
            _ => Err(Error::with_fragment(ErrorKind::TooManySlashes, src)),
        }
    }
}

from_prims! { Rational; Rational::from }

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::rational::Rational;

    #[test]
    fn check_parse() {
        let r: Rational = "  6/-4 ".parse().unwrap();
        assert_eq!(r.to_fraction(), "-3/2");
        let r: Rational = "1.5/0.(3)".parse().unwrap();
        assert_eq!(r.to_fraction(), "9/2");
        let r: Rational = "1e3/7".parse().unwrap();
        assert_eq!(r.to_fraction(), "1000/7");
        let err = "1/2/3".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManySlashes);
        let err = "1/0.0".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        let err = "1/".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyString);
        let err = "a/2".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    }

    #[test]
    fn check_display() {
        let r: Rational = "-1/3".parse().unwrap();
        assert_eq!(r.to_string(), "-0.(3)");
        assert_eq!(format!("{:>8}", r), "  -0.(3)");
        assert_eq!(format!("{:?}", Rational::from(5)), "5");
        let r: Rational = "0/-7".parse().unwrap();
        assert_eq!(r.to_string(), "0");
    }
}
