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

//! Exact fractions.
//!
//! This module provides the fraction type
//! [`Rational`](../struct.Rational.html), the result of every exact
//! division.

mod arith;
pub(crate) mod big;
mod cmp;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use self::big::Rational;

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::fixed::Fixed;
    use crate::number::Number;
    use crate::rational::Rational;
    use crate::round::{ModType, RoundingMode};
    use num_bigint::BigInt;

    fn ratio(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn check_max_digits() {
        let r = ratio("-19.51(7890)");
        let expected = [
            "-19",
            "-19.5",
            "-19.51",
            "-19.517",
            "-19.5178",
            "-19.51789",
            "-19.51(7890)",
            "-19.51(7890)",
        ];
        for (max, e) in expected.iter().enumerate() {
            assert_eq!(r.to_repeating_digits(Some(max)), *e, "{}", max);
        }
        let r = ratio("-1916.51(7890)/10");
        let expected = [
            "-191",
            "-191.6",
            "-191.65",
            "-191.651",
            "-191.6517",
            "-191.65178",
            "-191.651789",
            "-191.651(7890)",
        ];
        for (max, e) in expected.iter().enumerate() {
            assert_eq!(r.to_repeating_digits(Some(max)), *e, "{}", max);
        }
        assert_eq!(ratio("1/4").to_repeating_digits(Some(1)), "0.2");
        assert_eq!(ratio("1/4").to_repeating_digits(Some(5)), "0.25");
        assert_eq!(ratio("-1/1000").to_repeating_digits(Some(2)), "0");
    }

    #[test]
    fn check_repeating_round_trip() {
        for s in &["0.5(1)", "0.(200)", "0.000(5)", "-9.00123456(789780)"] {
            assert_eq!(ratio(s).to_string(), *s);
        }
        let (whole, pre, cycle) = ratio("-9.00123456(789780)").repeating_parts(None);
        assert_eq!(whole, "-9");
        assert_eq!(pre, "00123456");
        assert_eq!(cycle, "789780");
    }

    #[test]
    fn check_decimal_format() {
        assert_eq!(ratio("3/8").decimal_format(None), (3, Some(0)));
        assert_eq!(ratio("1/7").decimal_format(None), (0, Some(6)));
        assert_eq!(ratio("1/7").decimal_format(Some(6)), (0, Some(6)));
        assert_eq!(ratio("1/7").decimal_format(Some(5)), (0, None));
        assert_eq!(ratio("7/60").decimal_format(Some(0)), (2, Some(1)));
    }

    #[test]
    fn check_round() {
        let r = ratio("-1/3");
        assert_eq!(r.ceil(0).to_string(), "0");
        assert_eq!(r.floor(0).to_string(), "-1");
        assert_eq!(r.round(3, RoundingMode::AwayFromZero).to_string(), "-0.334");
        let r = ratio("5/2");
        assert_eq!(r.round(0, RoundingMode::NearestToEven).to_string(), "2");
        assert_eq!(r.round(0, RoundingMode::NearestToZero).to_string(), "2");
        assert_eq!(r.round(0, RoundingMode::NearestAwayFromZero).to_string(), "3");
        // 0.10(5) is above the tie at 0.105
        let r = ratio("0.10(5)");
        assert_eq!(r.round(2, RoundingMode::NearestToZero).to_string(), "0.11");
        let r = ratio("-0.10(4)");
        assert_eq!(r.round(2, RoundingMode::NearestAwayFromZero).to_string(), "-0.1");
        let r = ratio("2/3").round_to_digits(3, RoundingMode::NearestToEven);
        assert_eq!(r.unwrap().to_string(), "0.667");
        let r = ratio("-200/3").round_to_digits(1, RoundingMode::ToZero);
        assert_eq!(r.unwrap().to_string(), "-60");
        let r = ratio("1/3").round_to_digits(0, RoundingMode::ToZero);
        assert_eq!(r.unwrap_err().kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn check_formatting() {
        let mode = RoundingMode::ToZero;
        assert_eq!(ratio("10/2").to_exponential(4, mode, false), "5.0000e+0");
        assert_eq!(
            ratio("898959115147.5903").to_exponential(5, mode, false),
            "8.98959e+11"
        );
        assert_eq!(ratio("-1/7").to_exponential(2, mode, false), "-1.42e-1");
        assert_eq!(ratio("0").to_exponential(2, mode, true), "0e+0");
        assert_eq!(ratio("1/3").to_fixed(4, mode, false), "0.3333");
        assert_eq!(ratio("1/8").to_fixed(1, mode, true), "0.1");
        assert_eq!(ratio("200/3").to_precision(3, mode, false).unwrap(), "66.6");
        assert_eq!(ratio("1/3").to_string_radix(3, None).unwrap(), "0.1");
        assert_eq!(ratio("-10/3").to_string_radix(2, Some(3)).unwrap(), "-11.(01)");
        assert_eq!(ratio("-10/3").to_string_radix(2, Some(1)).unwrap(), "-11.0");
        assert_eq!(ratio("6/4").to_fraction(), "3/2");
        assert_eq!(ratio("1/3").to_f64(), 1.0 / 3.0);
        assert_eq!(ratio("-5/2").to_f64(), -2.5);
    }

    #[test]
    fn check_parts() {
        let r = ratio("-7/2");
        assert_eq!(r.int_part().to_string(), "-3");
        assert_eq!(r.frac_part().to_fraction(), "-1/2");
        let r = Fixed::from_parts(BigInt::from(4), 1).to_rational();
        assert_eq!(r.fraction_parts(false), (BigInt::from(4), BigInt::from(10)));
        assert_eq!(r.fraction_parts(true), (BigInt::from(2), BigInt::from(5)));
        assert!(ratio("4/2").is_integer());
        assert!(ratio("3/3").is_one());
        assert!(!ratio("1/3").is_integer());
        assert_eq!(ratio("-1/3").sign(), -1);
        assert!(ratio("1/3").is_positive());
        assert!(!ratio("0/3").is_positive());
        assert!(!ratio("-1/3").is_positive());
    }

    #[test]
    fn check_normalize() {
        match ratio("3/8").normalize() {
            Number::Fixed(f) => assert_eq!(f.to_string(), "0.375"),
            Number::Rational(r) => panic!("not normalized: {}", r),
        }
        match ratio("2/6").normalize() {
            Number::Rational(r) => assert_eq!(r.to_fraction(), "1/3"),
            Number::Fixed(f) => panic!("not a fraction: {}", f),
        }
    }

    #[test]
    fn check_arith_methods() {
        let r = ratio("2/3");
        assert_eq!(r.pow(-2).unwrap().to_fraction(), "9/4");
        assert_eq!(r.pow(0).unwrap().to_fraction(), "1/1");
        assert_eq!(
            Rational::new().pow(-1).unwrap_err().kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(r.div(&ratio("4/9")).unwrap().to_fraction(), "3/2");
        assert_eq!(r.div_to_int(&ratio("-1/5")).unwrap().to_string(), "-3");
        assert_eq!(
            r.div(&Rational::new()).unwrap_err().kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(r.inv().unwrap().to_fraction(), "3/2");
        let m = r.rem(&ratio("1/4"), ModType::Euclidean).unwrap();
        assert_eq!(m.to_fraction(), "1/6");
        let m = ratio("-2/3").rem(&ratio("1/4"), ModType::Floored).unwrap();
        assert_eq!(m.to_fraction(), "1/12");
        let p = ratio("1/2").powm(&BigInt::from(3), &ratio("1"), ModType::Truncated);
        assert_eq!(p.unwrap().to_fraction(), "1/8");
        let p = ratio("3").powm(&BigInt::from(0), &ratio("2"), ModType::Truncated);
        assert_eq!(p.unwrap().to_fraction(), "1/1");
    }

    #[test]
    fn check_bitwise() {
        assert_eq!(ratio("12/1").bitwise_and(&ratio("10")).unwrap().to_string(), "8");
        assert_eq!(ratio("6/2").shift_left(2).unwrap().to_string(), "12");
        let err = ratio("1/2").bitwise_or(&ratio("1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPositiveInteger);
    }

    #[test]
    fn check_round_matches_fixed() {
        fn prop(numer: i32, denom: u16, decimals: u8) -> bool {
            let denom = 1u32 << (denom % 12);
            let r = Rational::from_ratio(BigInt::from(numer), BigInt::from(denom))
                .unwrap();
            let f = r.to_terminating().unwrap();
            let decimals = usize::from(decimals % 6);
            RoundingMode::ALL
                .iter()
                .all(|&mode| r.round(decimals, mode) == f.round(decimals, mode))
        }
        quickcheck::quickcheck(prop as fn(i32, u16, u8) -> bool);
    }
}
