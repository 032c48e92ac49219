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

/*!
Exact numbers in either representation, and helpers over them.

[`Number`](enum.Number.html) holds a [`Fixed`](../struct.Fixed.html) or
a [`Rational`](../struct.Rational.html). Any input that implements
[`IntoNumber`](trait.IntoNumber.html) (machine integers, big integers,
strings and existing values) can be passed where a number is expected.
*/

mod aggregate;
mod arith;
mod big;
mod cmp;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use self::aggregate::{from_base, gcd, lcm, max, min, range, range_by, Range};
pub use self::big::{IntoNumber, Number, MAX_SAFE_INTEGER};

use num_bigint::BigInt;
use num_traits::Signed;
use std::cmp::Ordering;

/// Compares `a / b` with `c / d`; denominators may have either sign
/// but must not be zero.
pub(crate) fn cmp_fractions(lhs: &(BigInt, BigInt), rhs: &(BigInt, BigInt)) -> Ordering {
    let (a, b) = positive_denom(lhs);
    let (c, d) = positive_denom(rhs);
    (a * &d).cmp(&(c * &b))
}

fn positive_denom(val: &(BigInt, BigInt)) -> (BigInt, BigInt) {
    if val.1.is_negative() {
        (-&val.0, -&val.1)
    } else {
        (val.0.clone(), val.1.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::cmp_fractions;
    use crate::error::ErrorKind;
    use crate::number::Number;
    use crate::round::{ModType, RoundingMode};
    use num_bigint::BigInt;
    use std::cmp::Ordering;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    fn pair(a: i64, b: i64) -> (BigInt, BigInt) {
        (BigInt::from(a), BigInt::from(b))
    }

    #[test]
    fn check_cmp_fractions() {
        assert_eq!(cmp_fractions(&pair(1, 2), &pair(-1, -2)), Ordering::Equal);
        assert_eq!(cmp_fractions(&pair(1, -3), &pair(-1, 4)), Ordering::Less);
        assert_eq!(cmp_fractions(&pair(2, 3), &pair(3, 5)), Ordering::Greater);
    }

    #[test]
    fn check_coercion() {
        assert_eq!(Number::new(9_007_199_254_740_991.0).unwrap().to_string(), "9007199254740991");
        assert_eq!(
            Number::new(9_007_199_254_740_992.0).unwrap_err().kind(),
            ErrorKind::UnsafeFloat
        );
        assert_eq!(Number::new(1.5).unwrap_err().kind(), ErrorKind::UnsafeFloat);
        assert_eq!(Number::new(std::f64::NAN).unwrap_err().kind(), ErrorKind::UnsafeFloat);
        assert_eq!(Number::new(-3.0).unwrap().to_string(), "-3");
        assert_eq!(Number::new(String::from("1/7")).unwrap().to_string(), "0.(142857)");
        assert_eq!(Number::new(BigInt::from(-4)).unwrap().to_string(), "-4");
        assert_eq!(Number::new(&num("2.5")).unwrap().to_string(), "2.5");
        assert_eq!(Number::from_ratio("0.3", "0.2").unwrap().to_string(), "1.5");
    }

    #[test]
    fn check_pow() {
        let two = num("2");
        assert_eq!(two.pow(&num("10")).unwrap().to_string(), "1024");
        assert_eq!(two.pow(&num("-3")).unwrap().to_string(), "0.125");
        assert_eq!(num("2/3").pow(&num("2")).unwrap().to_fraction(), "4/9");
        assert_eq!(num("2/3").pow(&num("-1")).unwrap().to_fraction(), "3/2");
        assert_eq!(
            two.pow(&num("0.5")).unwrap_err().kind(),
            ErrorKind::UnsupportedParameter
        );
        assert_eq!(
            two.pow(&num("9007199254740992")).unwrap_err().kind(),
            ErrorKind::UnsupportedParameter
        );
        assert_eq!(
            num("0").pow(&num("-1")).unwrap_err().kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(num("0.5").inv().unwrap().to_string(), "2");
        assert_eq!(num("1/7").to_string(), "0.(142857)");
        assert_eq!(num("2.(142857)").to_fraction(), "15/7");
    }

    #[test]
    fn check_mod_table() {
        let table = [
            (ModType::Truncated, ["2", "-2", "2", "-2"]),
            (ModType::Floored, ["2", "1", "-1", "-2"]),
            (ModType::Euclidean, ["2", "1", "2", "1"]),
        ];
        let pairs = [("5", "3"), ("-5", "3"), ("5", "-3"), ("-5", "-3")];
        for &(kind, expected) in table.iter() {
            for (&(a, b), e) in pairs.iter().zip(expected.iter()) {
                let r = num(a).rem(&num(b), kind).unwrap();
                assert_eq!(r.to_string(), *e, "{} {} {}", kind, a, b);
                let r = num(&format!("{}/1", a)).rem(&num(b), kind).unwrap();
                assert_eq!(r.to_string(), *e, "{} {} {}", kind, a, b);
            }
        }
        let err = num("1").rem(&num("0/5"), ModType::Floored).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn check_clamp() {
        let n = num("-2.6");
        assert_eq!(n.clamp_to("-2.5", -1).unwrap().to_string(), "-2.5");
        assert_eq!(n.clamp_to(-3, "-1/3").unwrap().to_string(), "-2.6");
        assert_eq!(num("1/2").clamp_to(-3, "-1/3").unwrap().to_string(), "-0.(3)");
        assert_eq!(
            n.clamp_to(0, -1).unwrap_err().to_string(),
            "Min parameter has to be smaller than max"
        );
        let ord = n.clone().clamp(num("-2"), num("-1/2"));
        assert_eq!(ord.to_string(), "-2");
    }

    #[test]
    fn check_rounding() {
        let n = num("-7/3");
        assert_eq!(n.round(2, RoundingMode::NearestToEven).to_string(), "-2.33");
        assert_eq!(n.floor(0).to_string(), "-3");
        assert_eq!(n.ceil(1).to_string(), "-2.3");
        assert_eq!(n.trunc(0).to_string(), "-2");
        assert_eq!(n.int_part().to_string(), "-2");
        assert_eq!(n.frac_part().to_string(), "-0.(3)");
        let r = n.round_to_digits(2, RoundingMode::AwayFromZero).unwrap();
        assert_eq!(r.to_string(), "-2.4");
        assert_eq!(num("1.50").normalize().to_string(), "1.5");
        assert!(num("6/4").normalize().is_fixed());
    }

    #[test]
    fn check_bitwise() {
        assert_eq!(num("12").bitwise_xor(&num("10/1")).unwrap().to_string(), "6");
        assert_eq!(num("12").bitwise_or(&num("3")).unwrap().to_string(), "15");
        assert_eq!(num("12").bitwise_and(&num("10")).unwrap().to_string(), "8");
        assert_eq!(num("1").shift_left(10).unwrap().to_string(), "1024");
        assert_eq!(num("1025").shift_right(10).unwrap().to_string(), "1");
        let err = num("-1").bitwise_and(&num("1")).unwrap_err();
        assert_eq!(err.to_string(), "Only positive integers are supported");
    }

    #[test]
    fn check_output() {
        let n = num("-1/3");
        let mode = RoundingMode::NearestToPositive;
        assert_eq!(n.to_fixed(3, mode, false), "-0.333");
        assert_eq!(n.to_exponential(2, mode, false), "-3.33e-1");
        assert_eq!(n.to_precision(4, mode, false).unwrap(), "-0.3333");
        assert_eq!(n.to_string_radix(3, None).unwrap(), "-0.1");
        assert_eq!(num("0.75").to_string_radix(2, None).unwrap(), "0.11");
        assert_eq!(num("0.75").to_fraction(), "3/4");
        assert_eq!(num("-0.75").to_f64(), -0.75);
    }

    #[test]
    fn check_decimal_round_trip() {
        fn prop(digits: i64, scale: u8) -> bool {
            let text = crate::codec::format_decimal(
                &BigInt::from(digits),
                usize::from(scale % 4),
                0,
            );
            let n: Number = text.parse().unwrap();
            let normalized = n.normalize();
            normalized.to_string().parse::<Number>().unwrap() == n
                && n.to_string_radix(7, None)
                    .and_then(|s| super::from_base(&s, 7))
                    .map_or(false, |back| back == n)
        }
        quickcheck::quickcheck(prop as fn(i64, u8) -> bool);
    }
}
