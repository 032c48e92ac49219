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
use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The rounding methods.
///
/// The directed modes only look at whether anything was discarded.
/// The nearest modes round to the closer neighbor and only differ on
/// exact ties.
///
/// # Examples
///
/// ```rust
/// use exactnum::{Fixed, RoundingMode};
/// let f: Fixed = "-3.5".parse().unwrap();
/// assert_eq!(f.round(0, RoundingMode::ToPositive).to_string(), "-3");
/// assert_eq!(f.round(0, RoundingMode::NearestToEven).to_string(), "-4");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoundingMode {
    /// Round towards plus infinity.
    ToPositive,
    /// Round towards minus infinity.
    ToNegative,
    /// Round towards zero.
    ToZero,
    /// Round away from zero.
    AwayFromZero,
    /// Round to the nearest, with ties towards plus infinity.
    NearestToPositive,
    /// Round to the nearest, with ties towards minus infinity.
    NearestToNegative,
    /// Round to the nearest, with ties to even.
    NearestToEven,
    /// Round to the nearest, with ties towards zero.
    NearestToZero,
    /// Round to the nearest, with ties away from zero.
    NearestAwayFromZero,
}

impl Default for RoundingMode {
    #[inline]
    fn default() -> RoundingMode {
        RoundingMode::NearestToPositive
    }
}

impl RoundingMode {
    /// All the rounding modes.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::ToPositive,
        RoundingMode::ToNegative,
        RoundingMode::ToZero,
        RoundingMode::AwayFromZero,
        RoundingMode::NearestToPositive,
        RoundingMode::NearestToNegative,
        RoundingMode::NearestToEven,
        RoundingMode::NearestToZero,
        RoundingMode::NearestAwayFromZero,
    ];

    fn name(self) -> &'static str {
        match self {
            RoundingMode::ToPositive => "TO_POSITIVE",
            RoundingMode::ToNegative => "TO_NEGATIVE",
            RoundingMode::ToZero => "TO_ZERO",
            RoundingMode::AwayFromZero => "AWAY_FROM_ZERO",
            RoundingMode::NearestToPositive => "NEAREST_TO_POSITIVE",
            RoundingMode::NearestToNegative => "NEAREST_TO_NEGATIVE",
            RoundingMode::NearestToEven => "NEAREST_TO_EVEN",
            RoundingMode::NearestToZero => "NEAREST_TO_ZERO",
            RoundingMode::NearestAwayFromZero => "NEAREST_AWAY_FROM_ZERO",
        }
    }

    /// Rounds `n / 10^shift` to an integer.
    ///
    /// `quot` and `rem` are the truncated quotient and remainder of
    /// that division, so `rem` has the sign of `n`; `negative` is the
    /// sign of `n`, which `quot` loses when it is zero.
    pub(crate) fn apply(
        self,
        quot: BigInt,
        rem: &BigInt,
        shift: usize,
        negative: bool,
    ) -> BigInt {
        if rem.is_zero() {
            return quot;
        }
        let away = |q: BigInt| if negative { q - 1 } else { q + 1 };
        match self {
            RoundingMode::ToZero => quot,
            RoundingMode::AwayFromZero => away(quot),
            RoundingMode::ToPositive if negative => quot,
            RoundingMode::ToPositive => quot + 1,
            RoundingMode::ToNegative if negative => quot - 1,
            RoundingMode::ToNegative => quot,
            _ => {
                let half = codec::pow10(shift) / 2;
                match rem.abs().cmp(&half) {
                    Ordering::Less => quot,
                    Ordering::Greater => away(quot),
                    Ordering::Equal => self.break_tie(quot, negative),
                }
            }
        }
    }

    fn break_tie(self, quot: BigInt, negative: bool) -> BigInt {
        let away = |q: BigInt| if negative { q - 1 } else { q + 1 };
        match self {
            RoundingMode::NearestToPositive if negative => quot,
            RoundingMode::NearestToPositive => quot + 1,
            RoundingMode::NearestToNegative if negative => quot - 1,
            RoundingMode::NearestToNegative => quot,
            RoundingMode::NearestToZero => quot,
            RoundingMode::NearestAwayFromZero => away(quot),
            RoundingMode::NearestToEven if quot.is_even() => quot,
            RoundingMode::NearestToEven => away(quot),
            // directed modes never reach a tie
            _ => quot,
        }
    }
}

impl Display for RoundingMode {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = Error;
    fn from_str(src: &str) -> Result<RoundingMode, Error> {
        RoundingMode::ALL
            .iter()
            .cloned()
            .find(|mode| mode.name().eq_ignore_ascii_case(src.trim()))
            .ok_or_else(|| {
                Error::with_fragment(ErrorKind::UnknownRoundingMode, src)
            })
    }
}

/// The sign conventions of the remainder.
///
/// For `(5, 3)`, `(-5, 3)`, `(5, -3)` and `(-5, -3)` the remainders
/// are `[2, -2, 2, -2]` when truncated, `[2, 1, -1, -2]` when floored
/// and `[2, 1, 2, 1]` when Euclidean.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModType {
    /// The remainder has the sign of the dividend.
    Truncated,
    /// The remainder has the sign of the divisor.
    Floored,
    /// The remainder is never negative.
    Euclidean,
}

impl Default for ModType {
    #[inline]
    fn default() -> ModType {
        ModType::Truncated
    }
}

impl ModType {
    fn name(self) -> &'static str {
        match self {
            ModType::Truncated => "TRUNCATED",
            ModType::Floored => "FLOORED",
            ModType::Euclidean => "EUCLIDEAN",
        }
    }

    /// Adjusts a truncated remainder `rem` of a division by `divisor`.
    pub(crate) fn adjust(self, rem: BigInt, divisor: &BigInt) -> BigInt {
        match self {
            ModType::Truncated => rem,
            ModType::Floored
                if !rem.is_zero() && rem.is_negative() != divisor.is_negative() =>
            {
                rem + divisor
            }
            ModType::Euclidean if rem.is_negative() => rem + divisor.abs(),
            _ => rem,
        }
    }
}

impl Display for ModType {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModType {
    type Err = Error;
    fn from_str(src: &str) -> Result<ModType, Error> {
        [ModType::Truncated, ModType::Floored, ModType::Euclidean]
            .iter()
            .cloned()
            .find(|kind| kind.name().eq_ignore_ascii_case(src.trim()))
            .ok_or_else(|| Error::with_fragment(ErrorKind::UnknownModType, src))
    }
}

/// Returns `1` or `-1`.
#[inline]
pub(crate) fn unit(negative: bool) -> BigInt {
    if negative {
        -BigInt::one()
    } else {
        BigInt::one()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{ModType, RoundingMode};
    use serde::de::{Deserialize, Deserializer, Error as DeError};
    use serde::ser::{Serialize, Serializer};

    macro_rules! serde_by_name {
        ($T:ty) => {
            impl Serialize for $T {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.name())
                }
            }

            impl<'de> Deserialize<'de> for $T {
                fn deserialize<D>(deserializer: D) -> Result<$T, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let name = String::deserialize(deserializer)?;
                    name.parse().map_err(DeError::custom)
                }
            }
        };
    }

    serde_by_name! { RoundingMode }
    serde_by_name! { ModType }
}

#[cfg(test)]
mod tests {
    use super::{ModType, RoundingMode};
    use crate::error::ErrorKind;
    use num_bigint::BigInt;

    fn round(n: i64, shift: usize, mode: RoundingMode) -> i64 {
        let n = BigInt::from(n);
        let div = BigInt::from(10_i64.pow(shift as u32));
        let quot = &n / &div;
        let rem = &n % &div;
        let res = mode.apply(quot, &rem, shift, n < BigInt::from(0));
        res.to_string().parse().unwrap()
    }

    #[test]
    fn check_apply() {
        use super::RoundingMode::*;
        assert_eq!(round(25, 1, NearestToEven), 2);
        assert_eq!(round(35, 1, NearestToEven), 4);
        assert_eq!(round(-25, 1, NearestToEven), -2);
        assert_eq!(round(-35, 1, NearestToPositive), -3);
        assert_eq!(round(-35, 1, NearestToNegative), -4);
        assert_eq!(round(-35, 1, NearestToZero), -3);
        assert_eq!(round(-35, 1, NearestAwayFromZero), -4);
        assert_eq!(round(-3, 1, ToNegative), -1);
        assert_eq!(round(-3, 1, ToPositive), 0);
        assert_eq!(round(3, 1, AwayFromZero), 1);
        assert_eq!(round(1_250, 3, NearestToEven), 1);
        assert_eq!(round(1_251, 3, NearestToEven), 1);
        assert_eq!(round(1_501, 3, NearestToEven), 2);
        assert_eq!(round(2_500, 3, NearestToEven), 2);
        assert_eq!(round(1_049, 2, NearestAwayFromZero), 10);
    }

    #[test]
    fn check_adjust() {
        let table = [
            (ModType::Truncated, [2, -2, 2, -2]),
            (ModType::Floored, [2, 1, -1, -2]),
            (ModType::Euclidean, [2, 1, 2, 1]),
        ];
        let pairs = [(5, 3), (-5, 3), (5, -3), (-5, -3)];
        for &(kind, expected) in table.iter() {
            for (&(a, b), &e) in pairs.iter().zip(expected.iter()) {
                let rem = BigInt::from(a % b);
                let res = kind.adjust(rem, &BigInt::from(b));
                assert_eq!(res, BigInt::from(e), "{} {} {}", kind, a, b);
            }
        }
    }

    #[test]
    fn check_names() {
        for &mode in RoundingMode::ALL.iter() {
            assert_eq!(mode.to_string().parse::<RoundingMode>(), Ok(mode));
        }
        assert_eq!(
            "nearest_to_even".parse::<RoundingMode>(),
            Ok(RoundingMode::NearestToEven)
        );
        assert_eq!(
            "UP".parse::<RoundingMode>().unwrap_err().kind(),
            ErrorKind::UnknownRoundingMode
        );
        assert_eq!("EUCLIDEAN".parse::<ModType>(), Ok(ModType::Euclidean));
        assert_eq!(
            "CEIL".parse::<ModType>().unwrap_err().kind(),
            ErrorKind::UnknownModType
        );
    }
}
