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

use crate::bitwise;
use crate::codec::{self, pow10};
use crate::error::{Error, ErrorKind, Result};
use crate::rational::Rational;
use crate::round::{ModType, RoundingMode};
use az::Az;
use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{One, Pow, Signed, Zero};

/// An exact decimal number stored as a scaled integer.
///
/// The value is <i>digits</i> × 10<sup>−<i>scale</i></sup>. Values are
/// not kept normalized: `1.50` has digits 150 and scale 2 until
/// [`normalize`](#method.normalize) strips the trailing zero. Equality
/// and ordering compare values, so `1.50 == 1.5`.
///
/// # Examples
///
/// ```rust
/// use exactnum::Fixed;
/// let a: Fixed = "1.25".parse().unwrap();
/// let b: Fixed = "-0.5".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "0.75");
/// assert_eq!((a * b).to_string(), "-0.625");
/// ```
#[derive(Clone)]
pub struct Fixed {
    pub(crate) digits: BigInt,
    pub(crate) scale: usize,
}

impl Fixed {
    /// Constructs a new fixed-point number with value 0.
    #[inline]
    pub fn new() -> Fixed {
        Fixed {
            digits: BigInt::zero(),
            scale: 0,
        }
    }

    /// Constructs the value <i>digits</i> × 10<sup>−<i>scale</i></sup>
    /// without any parsing or normalization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Fixed;
    /// use num_bigint::BigInt;
    /// let f = Fixed::from_parts(BigInt::from(-1205), 3);
    /// assert_eq!(f.to_string(), "-1.205");
    /// ```
    #[inline]
    pub fn from_parts(digits: BigInt, scale: usize) -> Fixed {
        Fixed { digits, scale }
    }

    /// Borrows the scaled integer.
    #[inline]
    pub fn digits(&self) -> &BigInt {
        &self.digits
    }

    /// Returns the number of decimal places.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Converts into the scaled integer and the number of decimal
    /// places.
    #[inline]
    pub fn into_parts(self) -> (BigInt, usize) {
        (self.digits, self.scale)
    }

    /// The digits expressed with `scale` decimal places, where `scale`
    /// is at least `self.scale`.
    pub(crate) fn rescaled(&self, scale: usize) -> BigInt {
        if scale == self.scale {
            self.digits.clone()
        } else {
            &self.digits * pow10(scale - self.scale)
        }
    }

    pub(crate) fn aligned(&self, other: &Fixed) -> (BigInt, BigInt, usize) {
        let scale = self.scale.max(other.scale);
        (self.rescaled(scale), other.rescaled(scale), scale)
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Returns `true` if the value is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits == pow10(self.scale)
    }

    /// Returns `true` if the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.scale == 0 || self.digits.is_multiple_of(&pow10(self.scale))
    }

    /// Returns `true` if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.digits.is_negative()
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

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Fixed {
        Fixed::from_parts(self.digits.abs(), self.scale)
    }

    /// Strips trailing zero digits from the fraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Fixed;
    /// let f: Fixed = "12.3400".parse().unwrap();
    /// assert_eq!(f.scale(), 4);
    /// assert_eq!(f.normalize().scale(), 2);
    /// ```
    pub fn normalize(&self) -> Fixed {
        if self.digits.is_zero() {
            return Fixed::new();
        }
        let ten = BigInt::from(10u32);
        let mut digits = self.digits.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quot, rem) = digits.div_rem(&ten);
            if !rem.is_zero() {
                break;
            }
            digits = quot;
            scale -= 1;
        }
        Fixed::from_parts(digits, scale)
    }

    /// Returns the value as an integer if it has no fractional part.
    pub(crate) fn to_integer(&self) -> Option<BigInt> {
        if self.scale == 0 {
            return Some(self.digits.clone());
        }
        let (quot, rem) = self.digits.div_rem(&pow10(self.scale));
        if rem.is_zero() {
            Some(quot)
        } else {
            None
        }
    }

    /// Converts to a fraction without reducing it.
    #[inline]
    pub fn to_rational(&self) -> Rational {
        Rational::from_parts_unchecked(self.digits.clone(), pow10(self.scale))
    }

    /// Returns the numerator and denominator of the value, reduced to
    /// lowest terms if `normalize` is `true`.
    pub fn fraction_parts(&self, normalize: bool) -> (BigInt, BigInt) {
        let denom = pow10(self.scale);
        if !normalize {
            return (self.digits.clone(), denom);
        }
        let gcd = self.digits.gcd(&denom);
        (&self.digits / &gcd, denom / gcd)
    }

    /// Divides exactly, giving a fraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Fixed;
    /// let a = Fixed::from(1);
    /// let b = Fixed::from(7);
    /// assert_eq!(a.div(&b).unwrap().to_string(), "0.(142857)");
    /// assert!(a.div(&Fixed::new()).is_err());
    /// ```
    pub fn div(&self, other: &Fixed) -> Result<Rational> {
        let (numer, denom, _) = self.aligned(other);
        Rational::from_ratio(numer, denom)
    }

    /// Divides and truncates the quotient to an integer.
    pub fn div_to_int(&self, other: &Fixed) -> Result<Fixed> {
        let (numer, denom, _) = self.aligned(other);
        if denom.is_zero() {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }
        Ok(Fixed::from(numer / denom))
    }

    /// Computes the remainder with the sign convention of `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, ModType};
    /// let a: Fixed = "-5.5".parse().unwrap();
    /// let b = Fixed::from(2);
    /// let r = a.rem(&b, ModType::Truncated).unwrap();
    /// assert_eq!(r.to_string(), "-1.5");
    /// let r = a.rem(&b, ModType::Floored).unwrap();
    /// assert_eq!(r.to_string(), "0.5");
    /// ```
    pub fn rem(&self, other: &Fixed, kind: ModType) -> Result<Fixed> {
        let (numer, denom, scale) = self.aligned(other);
        if denom.is_zero() {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }
        let rem = kind.adjust(numer % &denom, &denom);
        Ok(Fixed::from_parts(rem, scale))
    }

    /// Raises to a non-negative integer power.
    pub fn pow(&self, exp: u32) -> Fixed {
        let digits = Pow::pow(&self.digits, exp);
        Fixed::from_parts(digits, self.scale * exp.az::<usize>())
    }

    /// Computes `self` to the power of `exp`, reduced modulo `modulus`
    /// after every multiplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, ModType};
    /// use num_bigint::BigInt;
    /// let base = Fixed::from(314);
    /// let m = Fixed::from(971);
    /// let r = base.powm(&BigInt::from(23), &m, ModType::Truncated);
    /// assert_eq!(r.unwrap(), Fixed::from(865));
    /// ```
    pub fn powm(
        &self,
        exp: &BigInt,
        modulus: &Fixed,
        kind: ModType,
    ) -> Result<Fixed> {
        if exp.is_negative() {
            return Err(Error::new(ErrorKind::UnsupportedParameter));
        }
        let mut base = self.rem(modulus, kind)?;
        let mut res: Option<Fixed> = None;
        let mut exp = exp.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                res = Some(match res {
                    Some(acc) => (&acc * &base).rem(modulus, kind)?,
                    None => base.clone(),
                });
            }
            exp >>= 1;
            if !exp.is_zero() {
                base = (&base * &base).rem(modulus, kind)?;
            }
        }
        match res {
            Some(res) => Ok(res),
            None => Fixed::from(1).rem(modulus, kind),
        }
    }

    /// Returns the reciprocal.
    pub fn inv(&self) -> Result<Rational> {
        Rational::from_ratio(pow10(self.scale), self.digits.clone())
    }

    /// Rounds to `decimals` decimal places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, RoundingMode};
    /// let f: Fixed = "2.345".parse().unwrap();
    /// let r = f.round(2, RoundingMode::NearestToEven);
    /// assert_eq!(r.to_string(), "2.34");
    /// let r = f.round(2, RoundingMode::NearestAwayFromZero);
    /// assert_eq!(r.to_string(), "2.35");
    /// ```
    pub fn round(&self, decimals: usize, mode: RoundingMode) -> Fixed {
        if self.scale <= decimals {
            return self.clone();
        }
        let shift = self.scale - decimals;
        let (quot, rem) = self.digits.div_rem(&pow10(shift));
        let digits = mode.apply(quot, &rem, shift, self.is_negative());
        Fixed::from_parts(digits, decimals)
    }

    /// Rounds towards minus infinity at `decimals` places.
    #[inline]
    pub fn floor(&self, decimals: usize) -> Fixed {
        self.round(decimals, RoundingMode::ToNegative)
    }

    /// Rounds towards plus infinity at `decimals` places.
    #[inline]
    pub fn ceil(&self, decimals: usize) -> Fixed {
        self.round(decimals, RoundingMode::ToPositive)
    }

    /// Rounds towards zero at `decimals` places.
    #[inline]
    pub fn trunc(&self, decimals: usize) -> Fixed {
        self.round(decimals, RoundingMode::ToZero)
    }

    /// Rounds to `digits` significant digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, RoundingMode};
    /// let f: Fixed = "-123.456".parse().unwrap();
    /// let r = f.round_to_digits(2, RoundingMode::ToZero).unwrap();
    /// assert_eq!(r.to_string(), "-120");
    /// assert!(f.round_to_digits(0, RoundingMode::ToZero).is_err());
    /// ```
    pub fn round_to_digits(
        &self,
        digits: usize,
        mode: RoundingMode,
    ) -> Result<Fixed> {
        if digits == 0 {
            return Err(Error::new(ErrorKind::InvalidParameter));
        }
        Ok(self.round_significant(digits, mode))
    }

    // digits must be positive
    pub(crate) fn round_significant(
        &self,
        digits: usize,
        mode: RoundingMode,
    ) -> Fixed {
        // shift into [0.1, 1), round there, then shift back
        let count = codec::count_digits(&self.digits);
        let unit = Fixed::from_parts(self.digits.clone(), count);
        let offset = count.az::<isize>() - self.scale.az::<isize>();
        unit.round(digits, mode).shift_decimal(offset)
    }

    /// Multiplies by 10<sup>`amount`</sup>, consuming decimal places
    /// before appending zeros.
    pub(crate) fn shift_decimal(&self, amount: isize) -> Fixed {
        if amount <= 0 {
            let scale = self.scale + amount.unsigned_abs();
            return Fixed::from_parts(self.digits.clone(), scale);
        }
        let amount = amount.unsigned_abs();
        let consumed = amount.min(self.scale);
        let rest = amount - consumed;
        let digits = if rest > 0 {
            &self.digits * pow10(rest)
        } else {
            self.digits.clone()
        };
        Fixed::from_parts(digits, self.scale - consumed)
    }

    /// Returns the integer part, truncating towards zero.
    #[inline]
    pub fn int_part(&self) -> Fixed {
        self.trunc(0)
    }

    /// Returns the fractional part, which has the sign of `self`.
    #[inline]
    pub fn frac_part(&self) -> Fixed {
        self - self.int_part()
    }

    fn bitwise_operand(&self) -> Result<BigInt> {
        match self.to_integer() {
            Some(n) if !n.is_negative() => Ok(n),
            _ => Err(Error::new(ErrorKind::NotPositiveInteger)),
        }
    }

    /// Bitwise AND of two non-negative integers.
    pub fn bitwise_and(&self, other: &Fixed) -> Result<Fixed> {
        let (a, b) = (self.bitwise_operand()?, other.bitwise_operand()?);
        Ok(Fixed::from(bitwise::and(&a, &b)))
    }

    /// Bitwise OR of two non-negative integers.
    pub fn bitwise_or(&self, other: &Fixed) -> Result<Fixed> {
        let (a, b) = (self.bitwise_operand()?, other.bitwise_operand()?);
        Ok(Fixed::from(bitwise::or(&a, &b)))
    }

    /// Bitwise XOR of two non-negative integers.
    pub fn bitwise_xor(&self, other: &Fixed) -> Result<Fixed> {
        let (a, b) = (self.bitwise_operand()?, other.bitwise_operand()?);
        Ok(Fixed::from(bitwise::xor(&a, &b)))
    }

    /// Multiplies a non-negative integer by 2<sup>`bits`</sup>.
    pub fn shift_left(&self, bits: usize) -> Result<Fixed> {
        let n = self.bitwise_operand()?;
        Ok(Fixed::from(bitwise::shift_left(&n, bits)))
    }

    /// Divides a non-negative integer by 2<sup>`bits`</sup>, rounding
    /// down.
    pub fn shift_right(&self, bits: usize) -> Result<Fixed> {
        let n = self.bitwise_operand()?;
        Ok(Fixed::from(bitwise::shift_right(&n, bits)))
    }

    /// Formats with exactly `decimals` decimal places, or fewer when
    /// `trim_zeros` is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, RoundingMode};
    /// let f: Fixed = "-1.5".parse().unwrap();
    /// assert_eq!(f.to_fixed(3, RoundingMode::ToZero, false), "-1.500");
    /// assert_eq!(f.to_fixed(0, RoundingMode::NearestToEven, false), "-2");
    /// assert_eq!(f.to_fixed(3, RoundingMode::ToZero, true), "-1.5");
    /// ```
    pub fn to_fixed(
        &self,
        decimals: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> String {
        let rounded = self.round(decimals, mode);
        let s = codec::format_decimal(&rounded.digits, rounded.scale, decimals);
        if trim_zeros {
            codec::trim_zeros(&s)
        } else {
            s
        }
    }

    /// Formats in scientific notation with `digits` digits after the
    /// point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, RoundingMode};
    /// let f = Fixed::from(123);
    /// assert_eq!(f.to_exponential(4, RoundingMode::ToZero, false), "1.2300e+2");
    /// assert_eq!(f.to_exponential(4, RoundingMode::ToZero, true), "1.23e+2");
    /// ```
    pub fn to_exponential(
        &self,
        digits: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> String {
        let rounded = self.round_significant(digits + 1, mode).normalize();
        let abs = rounded.digits.magnitude().to_str_radix(10);
        let mut mantissa = if abs.len() <= digits {
            format!("{}{}", abs, "0".repeat(digits + 1 - abs.len()))
        } else {
            abs[..=digits].to_string()
        };
        if mantissa.len() > 1 {
            mantissa.insert(1, '.');
            if trim_zeros {
                mantissa = codec::trim_zeros(&mantissa);
            }
        }
        let exponent = (abs.len() - 1).az::<isize>() - rounded.scale.az::<isize>();
        format!(
            "{}{}e{}{}",
            if rounded.is_negative() { "-" } else { "" },
            mantissa,
            if exponent >= 0 { "+" } else { "" },
            exponent
        )
    }

    /// Formats with `digits` significant digits, never using scientific
    /// notation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Fixed, RoundingMode};
    /// let f: Fixed = "0.0012345".parse().unwrap();
    /// let s = f.to_precision(3, RoundingMode::NearestToEven, false);
    /// assert_eq!(s.unwrap(), "0.00123");
    /// let f = Fixed::from(123456);
    /// let s = f.to_precision(2, RoundingMode::ToZero, false);
    /// assert_eq!(s.unwrap(), "120000");
    /// ```
    pub fn to_precision(
        &self,
        digits: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> Result<String> {
        let rounded = self.round_to_digits(digits, mode)?;
        Ok(rounded.precision_string(digits, trim_zeros))
    }

    // self must already be rounded to `digits` significant digits
    pub(crate) fn precision_string(
        &self,
        digits: usize,
        trim_zeros: bool,
    ) -> String {
        let all = self.digits.magnitude().to_str_radix(10);
        let offset = all.len().az::<isize>() - self.scale.az::<isize>();
        let whole_len = offset.max(0).unsigned_abs();
        let kept = &all[..all.len().min(digits.max(whole_len))];
        let (whole, frac) = kept.split_at(whole_len.min(kept.len()));
        let suffix = digits.saturating_sub(whole.len() + frac.len());
        let prefix = if offset < 0 { offset.unsigned_abs() } else { 0 };
        let mut res = String::new();
        if self.is_negative() {
            res.push('-');
        }
        res.push_str(if whole.is_empty() { "0" } else { whole });
        if frac.len() + prefix + suffix > 0 {
            res.push('.');
            res.push_str(&"0".repeat(prefix));
            res.push_str(frac);
            res.push_str(&"0".repeat(suffix));
        }
        if trim_zeros {
            codec::trim_zeros(&res)
        } else {
            res
        }
    }

    /// Formats in `radix` (2 to 16). Non-terminating fractions end with
    /// the repeating group in parentheses; `max_digits` limits the
    /// number of fraction digits written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Fixed;
    /// let f: Fixed = "-15.012".parse().unwrap();
    /// assert_eq!(f.to_string_radix(6, Some(6)).unwrap(), "-23.002331");
    /// let f: Fixed = "0.1".parse().unwrap();
    /// assert_eq!(f.to_string_radix(2, None).unwrap(), "0.0(0011)");
    /// ```
    pub fn to_string_radix(
        &self,
        radix: u32,
        max_digits: Option<usize>,
    ) -> Result<String> {
        codec::check_radix(radix)?;
        if radix == 10 {
            let f = match max_digits {
                Some(max) => self.trunc(max).normalize(),
                None => self.normalize(),
            };
            return Ok(codec::format_decimal(&f.digits, f.scale, 0));
        }
        let f = self.normalize();
        let denom = pow10(f.scale);
        let (int, rem) = f.digits.abs().div_rem(&denom);
        Ok(codec::expand_radix(
            f.is_negative(),
            &int,
            &rem,
            &denom,
            radix,
            max_digits,
        ))
    }

    /// Formats as `numerator/denominator` in lowest terms.
    pub fn to_fraction(&self) -> String {
        let (numer, denom) = self.fraction_parts(true);
        format!("{}/{}", numer, denom)
    }

    /// Converts to the nearest `f64` through 20 significant digits.
    pub fn to_f64(&self) -> f64 {
        let rounded = self.round_significant(20, RoundingMode::ToZero);
        rounded
            .precision_string(20, false)
            .parse()
            .unwrap_or(::std::f64::NAN)
    }
}

impl From<BigInt> for Fixed {
    #[inline]
    fn from(val: BigInt) -> Fixed {
        Fixed::from_parts(val, 0)
    }
}

impl<'a> From<&'a BigInt> for Fixed {
    #[inline]
    fn from(val: &'a BigInt) -> Fixed {
        Fixed::from_parts(val.clone(), 0)
    }
}

impl Default for Fixed {
    #[inline]
    fn default() -> Fixed {
        Fixed::new()
    }
}

impl One for Fixed {
    #[inline]
    fn one() -> Fixed {
        Fixed::from_parts(BigInt::one(), 0)
    }
}

impl Zero for Fixed {
    #[inline]
    fn zero() -> Fixed {
        Fixed::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }
}
