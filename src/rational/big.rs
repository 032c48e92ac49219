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
use crate::fixed::Fixed;
use crate::number::Number;
use crate::round::{self, ModType, RoundingMode};
use az::Az;
use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{One, Pow, Signed, Zero};

/// An exact fraction of two arbitrary-precision integers.
///
/// The denominator is always positive. Results of arithmetic are
/// reduced to lowest terms; a value built from a [`Fixed`] through
/// [`Fixed::to_rational`] keeps its power-of-ten denominator until it
/// takes part in an operation or is [`simplify`](#method.simplify)'d.
///
/// # Examples
///
/// ```rust
/// use exactnum::Rational;
/// let r: Rational = "1/3".parse().unwrap();
/// let s: Rational = "0.1(6)".parse().unwrap();
/// assert_eq!((&r + &s).to_string(), "0.5");
/// assert_eq!((r * s).to_fraction(), "1/18");
/// ```
///
/// [`Fixed`]: struct.Fixed.html
/// [`Fixed::to_rational`]: struct.Fixed.html#method.to_rational
#[derive(Clone)]
pub struct Rational {
    pub(crate) numer: BigInt,
    pub(crate) denom: BigInt,
}

// Splits off the factors two and five: (twos, fives, rest).
fn strip_two_five(n: &BigInt) -> (usize, usize, BigInt) {
    let (two, five) = (BigInt::from(2u32), BigInt::from(5u32));
    let mut rest = n.abs();
    let mut twos = 0;
    while !rest.is_zero() && rest.is_even() {
        rest /= &two;
        twos += 1;
    }
    let mut fives = 0;
    while !rest.is_zero() && rest.is_multiple_of(&five) {
        rest /= &five;
        fives += 1;
    }
    (twos, fives, rest)
}

impl Rational {
    /// Constructs a new fraction with value 0.
    #[inline]
    pub fn new() -> Rational {
        Rational {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// Constructs `numer / denom` in lowest terms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{ErrorKind, Rational};
    /// use num_bigint::BigInt;
    /// let r = Rational::from_ratio(BigInt::from(6), BigInt::from(-4));
    /// assert_eq!(r.unwrap().to_fraction(), "-3/2");
    /// let r = Rational::from_ratio(BigInt::from(1), BigInt::from(0));
    /// assert_eq!(r.unwrap_err().kind(), ErrorKind::DivisionByZero);
    /// ```
    pub fn from_ratio(numer: BigInt, denom: BigInt) -> Result<Rational> {
        if denom.is_zero() {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }
        Ok(Rational::reduced(numer, denom))
    }

    // denom must be positive
    #[inline]
    pub(crate) fn from_parts_unchecked(numer: BigInt, denom: BigInt) -> Rational {
        Rational { numer, denom }
    }

    // denom must be non-zero
    pub(crate) fn reduced(numer: BigInt, denom: BigInt) -> Rational {
        let gcd = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / &gcd, denom / gcd);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Rational { numer, denom }
    }

    /// Borrows the numerator.
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Borrows the denominator, which is always positive.
    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Reduces to lowest terms.
    #[inline]
    pub fn simplify(&self) -> Rational {
        Rational::reduced(self.numer.clone(), self.denom.clone())
    }

    /// Returns the numerator and denominator, reduced to lowest terms
    /// if `normalize` is `true`.
    pub fn fraction_parts(&self, normalize: bool) -> (BigInt, BigInt) {
        if normalize {
            let r = self.simplify();
            (r.numer, r.denom)
        } else {
            (self.numer.clone(), self.denom.clone())
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numer == self.denom
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.numer.is_multiple_of(&self.denom)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub(crate) fn is_positive(&self) -> bool {
        self.numer.is_positive()
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

    #[inline]
    pub fn abs(&self) -> Rational {
        Rational::from_parts_unchecked(self.numer.abs(), self.denom.clone())
    }

    /// Converts to the smallest exact representation: a [`Fixed`] when
    /// the decimal expansion terminates, a reduced fraction otherwise.
    ///
    /// [`Fixed`]: struct.Fixed.html
    pub fn normalize(&self) -> Number {
        match self.to_terminating() {
            Some(fixed) => Number::Fixed(fixed.normalize()),
            None => Number::Rational(self.simplify()),
        }
    }

    /// The value as a fixed-point number if its decimal expansion
    /// terminates.
    pub(crate) fn to_terminating(&self) -> Option<Fixed> {
        let r = self.simplify();
        let (twos, fives, rest) = strip_two_five(&r.denom);
        if !rest.is_one() {
            return None;
        }
        let scale = twos.max(fives);
        let digits = r.numer * (pow10(scale) / r.denom);
        Some(Fixed::from_parts(digits, scale))
    }

    /// Divides exactly.
    pub fn div(&self, other: &Rational) -> Result<Rational> {
        Rational::from_ratio(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    /// Divides and truncates the quotient to an integer.
    pub fn div_to_int(&self, other: &Rational) -> Result<Fixed> {
        Ok(self.div(other)?.trunc(0))
    }

    /// Computes the remainder with the sign convention of `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{ModType, Rational};
    /// let a: Rational = "-7/3".parse().unwrap();
    /// let b: Rational = "1/2".parse().unwrap();
    /// assert_eq!(a.rem(&b, ModType::Truncated).unwrap().to_fraction(), "-1/3");
    /// assert_eq!(a.rem(&b, ModType::Floored).unwrap().to_fraction(), "1/6");
    /// ```
    pub fn rem(&self, other: &Rational, kind: ModType) -> Result<Rational> {
        let divisor = &other.numer * &self.denom;
        if divisor.is_zero() {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }
        let rem = kind.adjust((&self.numer * &other.denom) % &divisor, &divisor);
        Rational::from_ratio(rem, &self.denom * &other.denom)
    }

    /// Raises to an integer power.
    pub fn pow(&self, exp: i64) -> Result<Rational> {
        let magnitude = exp.unsigned_abs();
        let numer = Pow::pow(&self.numer, magnitude);
        let denom = Pow::pow(&self.denom, magnitude);
        if exp < 0 {
            Rational::from_ratio(denom, numer)
        } else {
            Ok(Rational::from_parts_unchecked(numer, denom))
        }
    }

    /// Computes `self` to the power of `exp`, reduced modulo `modulus`
    /// after every multiplication.
    pub fn powm(
        &self,
        exp: &BigInt,
        modulus: &Rational,
        kind: ModType,
    ) -> Result<Rational> {
        if exp.is_negative() {
            return Err(Error::new(ErrorKind::UnsupportedParameter));
        }
        let mut base = self.rem(modulus, kind)?;
        let mut res: Option<Rational> = None;
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
            None => Rational::from(1).rem(modulus, kind),
        }
    }

    /// Returns the reciprocal.
    #[inline]
    pub fn inv(&self) -> Result<Rational> {
        Rational::from_ratio(self.denom.clone(), self.numer.clone())
    }

    /// Returns the integer part, truncating towards zero.
    #[inline]
    pub fn int_part(&self) -> Fixed {
        self.trunc(0)
    }

    /// Returns the fractional part, which has the sign of `self`.
    pub fn frac_part(&self) -> Rational {
        let rem = &self.numer % &self.denom;
        Rational::reduced(rem, self.denom.clone())
    }

    /// Rounds to `decimals` decimal places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Rational, RoundingMode};
    /// let r: Rational = "1/6".parse().unwrap();
    /// assert_eq!(r.round(2, RoundingMode::NearestToEven).to_string(), "0.17");
    /// assert_eq!(r.round(2, RoundingMode::ToZero).to_string(), "0.16");
    /// ```
    pub fn round(&self, decimals: usize, mode: RoundingMode) -> Fixed {
        let scaled = &self.numer * pow10(decimals + 1);
        let (quot, rem) = scaled.div_rem(&self.denom);
        // A discarded tail lies strictly inside one unit of the extra
        // digit, so a further digit with the sign of the value stands in
        // for it.
        let approx = if rem.is_zero() {
            Fixed::from_parts(quot, decimals + 1)
        } else {
            let digits = quot * 10u32 + round::unit(self.is_negative());
            Fixed::from_parts(digits, decimals + 2)
        };
        approx.round(decimals, mode)
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
        if self.is_zero() {
            return Fixed::new();
        }
        let exp = self.magnitude_exponent();
        let shift = pow10(exp.unsigned_abs());
        let unit = if exp >= 0 {
            Rational::from_parts_unchecked(self.numer.clone(), &self.denom * shift)
        } else {
            Rational::from_parts_unchecked(&self.numer * shift, self.denom.clone())
        };
        unit.round(digits, mode).shift_decimal(exp)
    }

    // e with 10^(e-1) <= |self| < 10^e, self non-zero
    fn magnitude_exponent(&self) -> isize {
        let numer = self.numer.abs();
        let guess = codec::count_digits(&numer).az::<isize>()
            - codec::count_digits(&self.denom).az::<isize>();
        let shift = pow10(guess.unsigned_abs());
        let (lhs, rhs) = if guess >= 0 {
            (numer, &self.denom * shift)
        } else {
            (numer * shift, self.denom.clone())
        };
        if lhs >= rhs {
            guess + 1
        } else {
            guess
        }
    }

    /// Finds where the decimal expansion starts repeating and the length
    /// of the repeating group.
    ///
    /// Returns the number of non-repeating fraction digits and the cycle
    /// length, which is `Some(0)` for terminating expansions. With
    /// `max_digits`, the search gives up with `None` once the cycle would
    /// not fit in that many fraction digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Rational;
    /// let r: Rational = "1/12".parse().unwrap();
    /// assert_eq!(r.decimal_format(None), (2, Some(1)));
    /// let r: Rational = "1/7".parse().unwrap();
    /// assert_eq!(r.decimal_format(Some(3)), (0, None));
    /// ```
    pub fn decimal_format(&self, max_digits: Option<usize>) -> (usize, Option<usize>) {
        let r = self.simplify();
        let (twos, fives, rest) = strip_two_five(&r.denom);
        let cycle_start = twos.max(fives);
        if rest.is_one() {
            return (cycle_start, Some(0));
        }
        let limit = max_digits.map(|max| max.saturating_sub(cycle_start).max(1));
        let ten = BigInt::from(10u32);
        let mut rem = &ten % &rest;
        let mut len = 1;
        while !rem.is_one() {
            if limit == Some(len) {
                return (cycle_start, None);
            }
            rem = (rem * &ten) % &rest;
            len += 1;
        }
        (cycle_start, Some(len))
    }

    /// Splits the decimal expansion into the integer part, the
    /// non-repeating fraction digits and the repeating group.
    ///
    /// The integer part carries the sign. When the expansion is cut by
    /// `max_digits` the group is empty and trailing zeros are dropped.
    pub fn repeating_parts(&self, max_digits: Option<usize>) -> (String, String, String) {
        let (cycle_start, cycle_len) = self.decimal_format(max_digits);
        let (text, start) = match cycle_len {
            Some(len) if len > 0 => {
                let decimals = cycle_start + len;
                (self.to_fixed(decimals, RoundingMode::ToZero, false), cycle_start)
            }
            _ => {
                let decimals = max_digits.unwrap_or(cycle_start);
                let text = self.to_fixed(decimals, RoundingMode::ToZero, true);
                let start = text.len();
                (text, start)
            }
        };
        let (whole, frac) = match text.find('.') {
            Some(i) => (&text[..i], &text[i + 1..]),
            None => (&text[..], ""),
        };
        let split = start.min(frac.len());
        (
            whole.to_string(),
            frac[..split].to_string(),
            frac[split..].to_string(),
        )
    }

    /// Writes the decimal expansion with the repeating group in
    /// parentheses, such as `-19.51(7890)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Rational;
    /// let r: Rational = "-19.51(7890)".parse().unwrap();
    /// assert_eq!(r.to_repeating_digits(None), "-19.51(7890)");
    /// assert_eq!(r.to_repeating_digits(Some(3)), "-19.517");
    /// ```
    pub fn to_repeating_digits(&self, max_digits: Option<usize>) -> String {
        let (whole, pre, cycle) = self.repeating_parts(max_digits);
        let mut res = whole;
        if !pre.is_empty() || !cycle.is_empty() {
            res.push('.');
            res.push_str(&pre);
        }
        if !cycle.is_empty() {
            res.push('(');
            res.push_str(&cycle);
            res.push(')');
        }
        res
    }

    /// Bitwise AND of two non-negative integers.
    pub fn bitwise_and(&self, other: &Rational) -> Result<Fixed> {
        let (a, b) = (self.bitwise_operand()?, other.bitwise_operand()?);
        Ok(Fixed::from(bitwise::and(&a, &b)))
    }

    /// Bitwise OR of two non-negative integers.
    pub fn bitwise_or(&self, other: &Rational) -> Result<Fixed> {
        let (a, b) = (self.bitwise_operand()?, other.bitwise_operand()?);
        Ok(Fixed::from(bitwise::or(&a, &b)))
    }

    /// Bitwise XOR of two non-negative integers.
    pub fn bitwise_xor(&self, other: &Rational) -> Result<Fixed> {
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

    fn bitwise_operand(&self) -> Result<BigInt> {
        if !self.is_integer() || self.is_negative() {
            return Err(Error::new(ErrorKind::NotPositiveInteger));
        }
        Ok(&self.numer / &self.denom)
    }

    /// Formats with exactly `decimals` decimal places, or fewer when
    /// `trim_zeros` is `true`.
    pub fn to_fixed(
        &self,
        decimals: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> String {
        self.round(decimals, mode).to_fixed(decimals, mode, trim_zeros)
    }

    /// Formats in scientific notation with `digits` digits after the
    /// point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::{Rational, RoundingMode};
    /// let r: Rational = "2/3".parse().unwrap();
    /// let s = r.to_exponential(3, RoundingMode::NearestToEven, false);
    /// assert_eq!(s, "6.667e-1");
    /// ```
    pub fn to_exponential(
        &self,
        digits: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> String {
        self.round_significant(digits + 1, mode)
            .to_exponential(digits, mode, trim_zeros)
    }

    /// Formats with `digits` significant digits, never using scientific
    /// notation.
    pub fn to_precision(
        &self,
        digits: usize,
        mode: RoundingMode,
        trim_zeros: bool,
    ) -> Result<String> {
        let rounded = self.round_to_digits(digits, mode)?;
        Ok(rounded.precision_string(digits, trim_zeros))
    }

    /// Formats in `radix` (2 to 16). Radix 10 uses the repeating form of
    /// [`to_repeating_digits`](#method.to_repeating_digits).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::Rational;
    /// let r: Rational = "-10/3".parse().unwrap();
    /// assert_eq!(r.to_string_radix(2, None).unwrap(), "-11.(01)");
    /// assert_eq!(r.to_string_radix(10, None).unwrap(), "-3.(3)");
    /// let r: Rational = "1/7".parse().unwrap();
    /// assert_eq!(r.to_string_radix(10, Some(3)).unwrap(), "0.142");
    /// ```
    pub fn to_string_radix(
        &self,
        radix: u32,
        max_digits: Option<usize>,
    ) -> Result<String> {
        codec::check_radix(radix)?;
        if radix == 10 {
            return Ok(self.to_repeating_digits(max_digits));
        }
        let (int, rem) = self.numer.abs().div_rem(&self.denom);
        Ok(codec::expand_radix(
            self.is_negative(),
            &int,
            &rem,
            &self.denom,
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
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.round_significant(20, RoundingMode::ToZero).to_f64()
    }
}

impl From<BigInt> for Rational {
    #[inline]
    fn from(val: BigInt) -> Rational {
        Rational::from_parts_unchecked(val, BigInt::one())
    }
}

impl<'a> From<&'a BigInt> for Rational {
    #[inline]
    fn from(val: &'a BigInt) -> Rational {
        Rational::from(val.clone())
    }
}

impl<'a> From<&'a Fixed> for Rational {
    #[inline]
    fn from(val: &'a Fixed) -> Rational {
        val.to_rational()
    }
}

impl From<Fixed> for Rational {
    #[inline]
    fn from(val: Fixed) -> Rational {
        val.to_rational()
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Rational {
        Rational::new()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Rational {
        Rational::from(BigInt::one())
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Rational {
        Rational::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}
