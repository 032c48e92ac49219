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
use crate::error::{Error, ErrorKind, Result};
use crate::number::{IntoNumber, Number};
use crate::rational::Rational;
use crate::round::ModType;

fn extreme<I, F>(values: I, better: F) -> Result<Number>
where
    I: IntoIterator,
    I::Item: IntoNumber,
    F: Fn(&Number, &Number) -> bool,
{
    let mut iter = values.into_iter();
    let mut best = match iter.next() {
        Some(first) => first.into_number()?,
        None => return Err(Error::new(ErrorKind::EmptyInput)),
    };
    for val in iter {
        let val = val.into_number()?;
        if better(&val, &best) {
            best = val;
        }
    }
    Ok(best)
}

/// Returns the smallest of the values; the first one wins on ties.
///
/// # Examples
///
/// ```rust
/// use exactnum::number;
/// let m = number::min(vec!["-1/5", "2/6", "-2/10", "-2/11"]).unwrap();
/// assert_eq!(m.to_string(), "-0.2");
/// assert!(number::min(Vec::<i32>::new()).is_err());
/// ```
pub fn min<I>(values: I) -> Result<Number>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    extreme(values, |val, best| val < best)
}

/// Returns the largest of the values; the first one wins on ties.
pub fn max<I>(values: I) -> Result<Number>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    extreme(values, |val, best| val > best)
}

/// The greatest common divisor of two exact numbers, which need not be
/// integers.
///
/// # Examples
///
/// ```rust
/// use exactnum::number;
/// assert_eq!(number::gcd(12, -8).unwrap().to_string(), "4");
/// assert_eq!(number::gcd("0.8", "0.12").unwrap().to_string(), "0.04");
/// ```
pub fn gcd<A, B>(a: A, b: B) -> Result<Number>
where
    A: IntoNumber,
    B: IntoNumber,
{
    let (a, b) = (a.into_number()?.abs(), b.into_number()?.abs());
    let (mut big, mut small) = if b > a { (b, a) } else { (a, b) };
    loop {
        if small.is_zero() {
            return Ok(big);
        }
        big = big.rem(&small, ModType::Truncated)?;
        if big.is_zero() {
            return Ok(small);
        }
        small = small.rem(&big, ModType::Truncated)?;
    }
}

/// The least common multiple of two non-zero exact numbers.
pub fn lcm<A, B>(a: A, b: B) -> Result<Number>
where
    A: IntoNumber,
    B: IntoNumber,
{
    let (a, b) = (a.into_number()?.abs(), b.into_number()?.abs());
    let product = &a * &b;
    if product.is_zero() {
        return Err(Error::new(ErrorKind::LcmOfZero));
    }
    let gcd = gcd(a, b)?;
    Ok(product.div(&gcd)?.normalize())
}

/// Parses a number written in `radix` (2 to 16), which may end with a
/// repeating group such as `0.(01)`.
///
/// # Examples
///
/// ```rust
/// use exactnum::number;
/// assert_eq!(number::from_base("-104.4(10)", 5).unwrap().to_string(), "-29.841(6)");
/// assert_eq!(number::from_base("159.9(EB851)", 16).unwrap().to_string(), "345.62");
/// ```
pub fn from_base(src: &str, radix: u32) -> Result<Number> {
    codec::check_radix(radix)?;
    if radix == 10 {
        return src.parse();
    }
    let (numer, denom) = codec::parse_radix(src, radix)?;
    Ok(Rational::from_ratio(numer, denom)?.normalize())
}

/// An iterator over `start, start + step, ...` that stops before
/// reaching `end`.
///
/// A negative step counts down towards `end`.
#[derive(Clone, Debug)]
pub struct Range {
    next: Number,
    end: Number,
    step: Number,
}

impl Iterator for Range {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        let done = if self.step.is_negative() {
            self.next <= self.end
        } else {
            self.next >= self.end
        };
        if done {
            return None;
        }
        let next = &self.next + &self.step;
        Some(std::mem::replace(&mut self.next, next))
    }
}

/// Iterates from `start` up to, but excluding, `end` in steps of one.
///
/// # Examples
///
/// ```rust
/// use exactnum::number;
/// let values: Vec<String> = number::range("1/2", 3)
///     .unwrap()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(values, ["0.5", "1.5", "2.5"]);
/// ```
#[inline]
pub fn range<S, E>(start: S, end: E) -> Result<Range>
where
    S: IntoNumber,
    E: IntoNumber,
{
    range_by(start, end, 1)
}

/// Iterates from `start` towards `end`, excluding it, in steps of
/// `step`, which must not be zero.
///
/// # Examples
///
/// ```rust
/// use exactnum::number;
/// let values: Vec<String> = number::range_by(1, "-0.5", "-0.5")
///     .unwrap()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(values, ["1", "0.5", "0"]);
/// assert!(number::range_by(0, 1, 0).is_err());
/// ```
pub fn range_by<S, E, T>(start: S, end: E, step: T) -> Result<Range>
where
    S: IntoNumber,
    E: IntoNumber,
    T: IntoNumber,
{
    let step = step.into_number()?;
    if step.is_zero() {
        return Err(Error::new(ErrorKind::InvalidParameter));
    }
    Ok(Range {
        next: start.into_number()?,
        end: end.into_number()?,
        step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings<I: Iterator<Item = Number>>(iter: I) -> Vec<String> {
        iter.map(|n| n.to_string()).collect()
    }

    #[test]
    fn check_min_max() {
        assert_eq!(min(vec![5, -2, -3, 6]).unwrap().to_string(), "-3");
        assert_eq!(min(vec!["0.000", "1.2", "2/5"]).unwrap().to_string(), "0");
        assert_eq!(
            min(vec!["0.000", "-0.0001", "1.2", "2/5"]).unwrap().to_string(),
            "-0.0001"
        );
        assert_eq!(min(vec!["12"]).unwrap().to_string(), "12");
        assert_eq!(max(vec![5, -2, -7, 6]).unwrap().to_string(), "6");
        assert_eq!(max(vec!["0.000", "0.2", "2/5"]).unwrap().to_string(), "0.4");
        assert_eq!(
            max(vec!["-1/5", "2/6", "-2/10", "-2/11"]).unwrap().to_string(),
            "0.(3)"
        );
        assert_eq!(
            max(Vec::<&str>::new()).unwrap_err().to_string(),
            "Got empty array"
        );
        assert_eq!(
            min(vec!["x"]).unwrap_err().to_string(),
            "Cannot parse number \"x\""
        );
    }

    #[test]
    fn check_gcd_lcm() {
        assert_eq!(gcd(12, -8).unwrap().to_string(), "4");
        assert_eq!(gcd(8, -12).unwrap().to_string(), "4");
        assert_eq!(gcd("0.8", "0.12").unwrap().to_string(), "0.04");
        assert_eq!(gcd("0", "0.12").unwrap().to_string(), "0.12");
        assert_eq!(lcm(12, -8).unwrap().to_string(), "24");
        assert_eq!(lcm(8, -12).unwrap().to_string(), "24");
        assert_eq!(lcm("-0.8", "-0.12").unwrap().to_string(), "2.4");
        assert_eq!(lcm("0.1", "0.12").unwrap().to_string(), "0.6");
        assert_eq!(lcm(0, 5).unwrap_err().kind(), ErrorKind::LcmOfZero);
    }

    #[test]
    fn check_from_base() {
        let table = [
            ("0", 2, "0"),
            ("0101", 2, "5"),
            (".1", 2, "0.5"),
            ("-.1", 2, "-0.5"),
            ("101.00", 2, "5"),
            ("101.0101", 2, "5.3125"),
            ("102.21", 3, "11.(7)"),
            ("-104.4(10)", 5, "-29.841(6)"),
            ("-104.4(10)", 10, "-104.4(10)"),
            ("159.9(EB851)", 16, "345.62"),
            (".0(2)", 5, "0.1"),
        ];
        for &(src, radix, expected) in table.iter() {
            assert_eq!(from_base(src, radix).unwrap().to_string(), expected, "{}", src);
        }
        assert_eq!(from_base("2", 2).unwrap_err().to_string(), "Invalid digit \"2\"");
        assert_eq!(from_base("b", 11).unwrap_err().to_string(), "Invalid digit \"b\"");
        assert_eq!(from_base("1", 17).unwrap_err().kind(), ErrorKind::InvalidRadix);
        assert_eq!(from_base("1", 1).unwrap_err().kind(), ErrorKind::InvalidRadix);
        assert_eq!(from_base("", 2).unwrap_err().kind(), ErrorKind::EmptyString);
        assert_eq!(
            from_base("1x5", 9).unwrap_err().to_string(),
            "Cannot parse number \"1x5\""
        );
    }

    #[test]
    fn check_base_round_trip() {
        for src in &["0", "-0.02", "123.457(13)", "-5.(1)", "-0.0(1)"] {
            let n: Number = src.parse().unwrap();
            for radix in 2..=16 {
                let text = n.to_string_radix(radix, None).unwrap();
                let back = from_base(&text, radix).unwrap();
                assert_eq!(back.to_string(), *src, "{} in radix {}", src, radix);
            }
        }
    }

    #[test]
    fn check_range() {
        assert_eq!(strings(range(-2, 1).unwrap()), ["-2", "-1", "0"]);
        assert_eq!(
            strings(range_by(-2, 0, "0.5").unwrap()),
            ["-2", "-1.5", "-1", "-0.5"]
        );
        assert_eq!(
            strings(range_by(0, "1", "1/3").unwrap()),
            ["0", "0.(3)", "0.(6)"]
        );
        assert_eq!(range(3, 3).unwrap().count(), 0);
        assert_eq!(range(4, 3).unwrap().count(), 0);
        let err = range_by(0, 1, "0.0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}
