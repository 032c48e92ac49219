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

use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::rational::Rational;
use crate::round::{ModType, RoundingMode};
use az::CheckedAs;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Largest integer `n` such that every integer up to `n` is exactly
/// representable as an `f64`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// An exact number in one of its two representations.
///
/// Operations on two `Fixed` operands stay fixed-point; as soon as a
/// fraction is involved, or the operation is a division, the result is
/// a `Rational`. [`normalize`](#method.normalize) converts back to the
/// smallest representation.
///
/// # Examples
///
/// ```rust
/// use exactnum::Number;
/// let a = Number::new("1.5").unwrap();
/// let b = Number::new("1/3").unwrap();
/// let sum = &a + &b;
/// assert_eq!(sum.to_string(), "1.8(3)");
/// assert_eq!(sum.to_fraction(), "11/6");
/// let c = (a * Number::new(2).unwrap()).normalize();
/// assert!(c.is_fixed());
/// assert_eq!(c.to_string(), "3");
/// ```
#[derive(Clone)]
pub enum Number {
    /// A terminating decimal.
    Fixed(Fixed),
    /// A fraction.
    Rational(Rational),
}

/// Conversion into a [`Number`](enum.Number.html).
///
/// Strings containing `/` or a repeating group `(` become fractions,
/// other strings are parsed as decimals. Floating-point values are only
/// accepted when they are integers no larger than
/// [`MAX_SAFE_INTEGER`](constant.MAX_SAFE_INTEGER.html) in magnitude.
pub trait IntoNumber {
    /// Performs the conversion.
    fn into_number(self) -> Result<Number>;
}

impl IntoNumber for Number {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(self)
    }
}

impl<'a> IntoNumber for &'a Number {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(self.clone())
    }
}

impl IntoNumber for Fixed {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(Number::Fixed(self))
    }
}

impl IntoNumber for Rational {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(Number::Rational(self))
    }
}

impl IntoNumber for BigInt {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(Number::Fixed(Fixed::from(self)))
    }
}

impl<'a> IntoNumber for &'a BigInt {
    #[inline]
    fn into_number(self) -> Result<Number> {
        Ok(Number::Fixed(Fixed::from(self)))
    }
}

impl<'a> IntoNumber for &'a str {
    #[inline]
    fn into_number(self) -> Result<Number> {
        self.parse()
    }
}

impl IntoNumber for String {
    #[inline]
    fn into_number(self) -> Result<Number> {
        self.parse()
    }
}

impl IntoNumber for f64 {
    fn into_number(self) -> Result<Number> {
        let safe = self.fract() == 0.0 && self.abs() <= MAX_SAFE_INTEGER as f64;
        match self.checked_as::<i64>() {
            Some(int) if safe => int.into_number(),
            _ => Err(Error::new(ErrorKind::UnsafeFloat)),
        }
    }
}

macro_rules! into_number_prim {
    { $($T:ty)* } => {
        $(
            impl IntoNumber for $T {
                #[inline]
                fn into_number(self) -> Result<Number> {
                    Ok(Number::Fixed(Fixed::from(self)))
                }
            }
        )*
    }
}

into_number_prim! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

impl Number {
    /// Converts any supported input into a number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{ErrorKind, Number};
    /// assert_eq!(Number::new("2.(142857)").unwrap().to_fraction(), "15/7");
    /// assert_eq!(Number::new(-12).unwrap().to_string(), "-12");
    /// assert_eq!(Number::new(0.5).unwrap_err().kind(), ErrorKind::UnsafeFloat);
    /// ```
    #[inline]
    pub fn new<T>(val: T) -> Result<Number>
    where
        T: IntoNumber,
    {
        val.into_number()
    }

    /// Builds the fraction `x / y`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Number;
    /// let n = Number::from_ratio("1.5", 4).unwrap();
    /// assert_eq!(n.to_fraction(), "3/8");
    /// assert!(Number::from_ratio(1, 0).is_err());
    /// ```
    pub fn from_ratio<X, Y>(x: X, y: Y) -> Result<Number>
    where
        X: IntoNumber,
        Y: IntoNumber,
    {
        let (x, y) = (x.into_number()?, y.into_number()?);
        x.to_rational().div(&y.to_rational()).map(Number::Rational)
    }

    /// Returns `true` for the fixed-point representation.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        match self {
            Number::Fixed(_) => true,
            Number::Rational(_) => false,
        }
    }

    /// Converts to a fraction, without reducing it.
    pub fn to_rational(&self) -> Rational {
        match self {
            Number::Fixed(f) => f.to_rational(),
            Number::Rational(r) => r.clone(),
        }
    }

    /// Returns the value as an integer if it has no fractional part.
    pub(crate) fn to_integer(&self) -> Option<BigInt> {
        match self {
            Number::Fixed(f) => f.to_integer(),
            Number::Rational(r) if r.is_integer() => Some(&r.numer / &r.denom),
            Number::Rational(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Fixed(f) => f.is_zero(),
            Number::Rational(r) => r.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Number::Fixed(f) => f.is_one(),
            Number::Rational(r) => r.is_one(),
        }
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Number::Fixed(f) => f.is_integer(),
            Number::Rational(r) => r.is_integer(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Fixed(f) => f.is_negative(),
            Number::Rational(r) => r.is_negative(),
        }
    }

    /// Returns −1 for negative values and 1 otherwise, including zero.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> Number {
        match self {
            Number::Fixed(f) => Number::Fixed(f.abs()),
            Number::Rational(r) => Number::Rational(r.abs()),
        }
    }

    /// Strips trailing zeros from a fixed-point value, and converts a
    /// fraction to its smallest exact representation.
    pub fn normalize(&self) -> Number {
        match self {
            Number::Fixed(f) => Number::Fixed(f.normalize()),
            Number::Rational(r) => r.normalize(),
        }
    }

    /// Returns the numerator and denominator, reduced to lowest terms if
    /// `normalize` is `true`.
    pub fn fraction_parts(&self, normalize: bool) -> (BigInt, BigInt) {
        match self {
            Number::Fixed(f) => f.fraction_parts(normalize),
            Number::Rational(r) => r.fraction_parts(normalize),
        }
    }

    /// Divides exactly. The result is always a fraction.
    pub fn div(&self, other: &Number) -> Result<Number> {
        let res = match (self, other) {
            (Number::Fixed(a), Number::Fixed(b)) => a.div(b)?,
            (Number::Fixed(a), Number::Rational(b)) => a.to_rational().div(b)?,
            (Number::Rational(a), Number::Fixed(b)) => a.div(&b.to_rational())?,
            (Number::Rational(a), Number::Rational(b)) => a.div(b)?,
        };
        Ok(Number::Rational(res))
    }

    /// Divides and truncates the quotient to an integer.
    pub fn div_to_int(&self, other: &Number) -> Result<Number> {
        let res = match (self, other) {
            (Number::Fixed(a), Number::Fixed(b)) => a.div_to_int(b)?,
            _ => self.to_rational().div_to_int(&other.to_rational())?,
        };
        Ok(Number::Fixed(res))
    }

    /// Computes the remainder with the sign convention of `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{ModType, Number};
    /// let a = Number::new(-5).unwrap();
    /// let b = Number::new(3).unwrap();
    /// assert_eq!(a.rem(&b, ModType::Floored).unwrap().to_string(), "1");
    /// let c = Number::new("1/3").unwrap();
    /// assert_eq!(b.rem(&c, ModType::Truncated).unwrap().to_string(), "0");
    /// ```
    pub fn rem(&self, other: &Number, kind: ModType) -> Result<Number> {
        match (self, other) {
            (Number::Fixed(a), Number::Fixed(b)) => a.rem(b, kind).map(Number::Fixed),
            _ => self
                .to_rational()
                .rem(&other.to_rational(), kind)
                .map(Number::Rational),
        }
    }

    /// Raises to an integer power.
    ///
    /// The exponent must be an integer no larger than
    /// [`MAX_SAFE_INTEGER`](constant.MAX_SAFE_INTEGER.html) in magnitude.
    /// A negative exponent gives a fraction. Non-integer powers are
    /// approximations, see [`approx::pow`](approx/fn.pow.html).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Number;
    /// let base = Number::new("-1.5").unwrap();
    /// let n = base.pow(&Number::new(3).unwrap()).unwrap();
    /// assert_eq!(n.to_string(), "-3.375");
    /// let n = base.pow(&Number::new(-2).unwrap()).unwrap();
    /// assert_eq!(n.to_string(), "0.(4)");
    /// ```
    pub fn pow(&self, exp: &Number) -> Result<Number> {
        let exp = exp.safe_integer()?;
        match self {
            Number::Fixed(f) if exp >= 0 => {
                let exp = exp
                    .to_u32()
                    .ok_or_else(|| Error::new(ErrorKind::UnsupportedParameter))?;
                Ok(Number::Fixed(f.pow(exp)))
            }
            Number::Fixed(f) => f.to_rational().pow(exp).map(Number::Rational),
            Number::Rational(r) => r.pow(exp).map(Number::Rational),
        }
    }

    // The value as an i64 if it is an integer within the safe range.
    pub(crate) fn safe_integer(&self) -> Result<i64> {
        let unsupported = || Error::new(ErrorKind::UnsupportedParameter);
        let int = self.to_integer().ok_or_else(unsupported)?;
        match int.to_i64() {
            Some(n) if n.unsigned_abs() <= MAX_SAFE_INTEGER.unsigned_abs() => Ok(n),
            _ => Err(unsupported()),
        }
    }

    /// Modular exponentiation; `exp` must be a non-negative integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{ModType, Number};
    /// let base = Number::new(4).unwrap();
    /// let exp = Number::new(13).unwrap();
    /// let m = Number::new(497).unwrap();
    /// let r = base.powm(&exp, &m, ModType::Truncated).unwrap();
    /// assert_eq!(r.to_string(), "445");
    /// ```
    pub fn powm(&self, exp: &Number, modulus: &Number, kind: ModType) -> Result<Number> {
        let exp = exp
            .to_integer()
            .ok_or_else(|| Error::new(ErrorKind::UnsupportedParameter))?;
        match (self, modulus) {
            (Number::Fixed(a), Number::Fixed(m)) => a.powm(&exp, m, kind).map(Number::Fixed),
            _ => self
                .to_rational()
                .powm(&exp, &modulus.to_rational(), kind)
                .map(Number::Rational),
        }
    }

    /// Returns the reciprocal.
    #[inline]
    pub fn inv(&self) -> Result<Number> {
        self.to_rational().inv().map(Number::Rational)
    }

    /// Restricts the value to `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Number;
    /// let n = Number::new("-2.6").unwrap();
    /// let c = n.clamp_to("-2.5", -1).unwrap();
    /// assert_eq!(c.to_string(), "-2.5");
    /// assert!(n.clamp_to(1, 0).is_err());
    /// ```
    pub fn clamp_to<L, H>(&self, min: L, max: H) -> Result<Number>
    where
        L: IntoNumber,
        H: IntoNumber,
    {
        let (min, max) = (min.into_number()?, max.into_number()?);
        if min > max {
            return Err(Error::new(ErrorKind::InvalidBounds));
        }
        Ok(if *self < min {
            min
        } else if *self > max {
            max
        } else {
            self.clone()
        })
    }

    /// Rounds to `decimals` decimal places.
    pub fn round(&self, decimals: usize, mode: RoundingMode) -> Number {
        Number::Fixed(match self {
            Number::Fixed(f) => f.round(decimals, mode),
            Number::Rational(r) => r.round(decimals, mode),
        })
    }

    /// Rounds towards minus infinity at `decimals` places.
    #[inline]
    pub fn floor(&self, decimals: usize) -> Number {
        self.round(decimals, RoundingMode::ToNegative)
    }

    /// Rounds towards plus infinity at `decimals` places.
    #[inline]
    pub fn ceil(&self, decimals: usize) -> Number {
        self.round(decimals, RoundingMode::ToPositive)
    }

    /// Rounds towards zero at `decimals` places.
    #[inline]
    pub fn trunc(&self, decimals: usize) -> Number {
        self.round(decimals, RoundingMode::ToZero)
    }

    /// Rounds to `digits` significant digits.
    pub fn round_to_digits(&self, digits: usize, mode: RoundingMode) -> Result<Number> {
        let res = match self {
            Number::Fixed(f) => f.round_to_digits(digits, mode)?,
            Number::Rational(r) => r.round_to_digits(digits, mode)?,
        };
        Ok(Number::Fixed(res))
    }

    /// Returns the integer part, truncating towards zero.
    #[inline]
    pub fn int_part(&self) -> Number {
        self.trunc(0)
    }

    /// Returns the fractional part, which has the sign of `self`.
    pub fn frac_part(&self) -> Number {
        match self {
            Number::Fixed(f) => Number::Fixed(f.frac_part()),
            Number::Rational(r) => Number::Rational(r.frac_part()),
        }
    }

    pub fn bitwise_and(&self, other: &Number) -> Result<Number> {
        self.to_rational()
            .bitwise_and(&other.to_rational())
            .map(Number::Fixed)
    }

    pub fn bitwise_or(&self, other: &Number) -> Result<Number> {
        self.to_rational()
            .bitwise_or(&other.to_rational())
            .map(Number::Fixed)
    }

    pub fn bitwise_xor(&self, other: &Number) -> Result<Number> {
        self.to_rational()
            .bitwise_xor(&other.to_rational())
            .map(Number::Fixed)
    }

    pub fn shift_left(&self, bits: usize) -> Result<Number> {
        self.to_rational().shift_left(bits).map(Number::Fixed)
    }

    pub fn shift_right(&self, bits: usize) -> Result<Number> {
        self.to_rational().shift_right(bits).map(Number::Fixed)
    }

    /// Formats with exactly `decimals` decimal places, or fewer when
    /// `trim_zeros` is `true`.
    pub fn to_fixed(&self, decimals: usize, mode: RoundingMode, trim_zeros: bool) -> String {
        match self {
            Number::Fixed(f) => f.to_fixed(decimals, mode, trim_zeros),
            Number::Rational(r) => r.to_fixed(decimals, mode, trim_zeros),
        }
    }

    /// Formats in scientific notation with `digits` digits after the
    /// point.
    pub fn to_exponential(&self, digits: usize, mode: RoundingMode, trim_zeros: bool) -> String {
        match self {
            Number::Fixed(f) => f.to_exponential(digits, mode, trim_zeros),
            Number::Rational(r) => r.to_exponential(digits, mode, trim_zeros),
        }
    }

    /// Formats with `digits` significant digits.
    pub fn to_precision(
        &self,
        digits: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> Result<String> {
        match self {
            Number::Fixed(f) => f.to_precision(digits, mode, trim_zeros),
            Number::Rational(r) => r.to_precision(digits, mode, trim_zeros),
        }
    }

    /// Formats in `radix` (2 to 16), ending non-terminating expansions
    /// with the repeating group in parentheses.
    pub fn to_string_radix(&self, radix: u32, max_digits: Option<usize>) -> Result<String> {
        match self {
            Number::Fixed(f) => f.to_string_radix(radix, max_digits),
            Number::Rational(r) => r.to_string_radix(radix, max_digits),
        }
    }

    /// Formats as `numerator/denominator` in lowest terms.
    pub fn to_fraction(&self) -> String {
        match self {
            Number::Fixed(f) => f.to_fraction(),
            Number::Rational(r) => r.to_fraction(),
        }
    }

    /// Converts to the nearest `f64` through 20 significant digits.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Fixed(f) => f.to_f64(),
            Number::Rational(r) => r.to_f64(),
        }
    }
}
