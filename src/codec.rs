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

// Parsing and printing of the textual forms shared by `Fixed`,
// `Rational` and `Number`.

use crate::error::{Error, ErrorKind, Result};
use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{pow, Signed, ToPrimitive, Zero};
use std::collections::HashMap;

pub(crate) const MIN_RADIX: u32 = 2;
pub(crate) const MAX_RADIX: u32 = 16;

/// Returns 10<sup>`exp`</sup>.
#[inline]
pub(crate) fn pow10(exp: usize) -> BigInt {
    pow(BigInt::from(10u32), exp)
}

#[inline]
pub(crate) fn check_radix(radix: u32) -> Result<()> {
    if radix < MIN_RADIX || radix > MAX_RADIX {
        Err(Error::with_fragment(ErrorKind::InvalidRadix, radix.to_string()))
    } else {
        Ok(())
    }
}

/// Number of decimal digits in `|n|`, with zero counting as one digit.
pub(crate) fn count_digits(n: &BigInt) -> usize {
    n.magnitude().to_str_radix(10).len()
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn split_sign(text: &str) -> (bool, &str) {
    if text.starts_with('-') {
        (true, &text[1..])
    } else {
        (false, text)
    }
}

fn trimmed(src: &str) -> Result<&str> {
    let text = src.trim();
    if text.is_empty() {
        Err(Error::new(ErrorKind::EmptyString))
    } else {
        Ok(text)
    }
}

fn parse_exponent(src: &str, text: &str) -> Result<(bool, usize)> {
    let invalid = || Error::with_fragment(ErrorKind::InvalidNumber, src);
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !is_digits(digits) {
        return Err(invalid());
    }
    let exp = digits.parse::<usize>().map_err(|_| invalid())?;
    Ok((negative, exp))
}

/// Value of `text` read as digits in `radix`; empty text is zero.
pub(crate) fn digits_value(text: &str, radix: u32) -> Result<BigInt> {
    let mut value = BigInt::zero();
    for c in text.chars() {
        let digit = c.to_digit(radix).ok_or_else(|| {
            Error::with_fragment(ErrorKind::InvalidDigit, c.to_string())
        })?;
        value = value * radix + digit;
    }
    Ok(value)
}

/// Parses `[-]digits*[.digits*][(e|E)[+|-]digits+]` into `(digits,
/// scale)`.
pub(crate) fn parse_decimal(src: &str) -> Result<(BigInt, usize)> {
    let text = trimmed(src)?;
    let invalid = || Error::with_fragment(ErrorKind::InvalidNumber, text);
    let (negative, rest) = split_sign(text);
    let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };
    let (whole, frac) = match mantissa.find('.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !is_digits(whole) || !is_digits(frac) {
        return Err(invalid());
    }
    let mut digits = digits_value(whole, 10)? * pow10(frac.len());
    digits += digits_value(frac, 10)?;
    let mut scale = frac.len();
    if let Some(exponent) = exponent {
        match parse_exponent(text, exponent)? {
            (true, exp) => scale += exp,
            (false, exp) if exp >= scale => {
                digits *= pow10(exp - scale);
                scale = 0;
            }
            (false, exp) => scale -= exp,
        }
    }
    if negative {
        digits = -digits;
    }
    Ok((digits, scale))
}

/// Builds the ratio of a repeating expansion `whole.pre(rep)` in
/// `radix`.
pub(crate) fn repeating_ratio(
    radix: u32,
    whole: &str,
    pre: &str,
    rep: &str,
) -> Result<(BigInt, BigInt)> {
    let head = format!("{}{}", whole, pre);
    let full = format!("{}{}", head, rep);
    let numer = digits_value(&full, radix)? - digits_value(&head, radix)?;
    let radix_big = BigInt::from(radix);
    let denom = (pow(radix_big.clone(), rep.len()) - 1u32)
        * pow(radix_big, pre.len());
    Ok((numer, denom))
}

/// Parses a decimal that may carry a repeating group, such as
/// `-1.2(34)e5`, into `(numerator, denominator)`.
pub(crate) fn parse_ratio(src: &str) -> Result<(BigInt, BigInt)> {
    let text = trimmed(src)?;
    if !text.contains('(') {
        let (digits, scale) = parse_decimal(text)?;
        return Ok((digits, pow10(scale)));
    }
    let invalid = || Error::with_fragment(ErrorKind::InvalidNumber, text);
    let (negative, rest) = split_sign(text);
    let close = rest.find(')').ok_or_else(invalid)?;
    let (body, tail) = (&rest[..close], &rest[close + 1..]);
    let dot = body.find('.').ok_or_else(invalid)?;
    let (whole, after) = (&body[..dot], &body[dot + 1..]);
    let open = after.find('(').ok_or_else(invalid)?;
    let (pre, rep) = (&after[..open], &after[open + 1..]);
    if rep.is_empty() || !is_digits(whole) || !is_digits(pre) || !is_digits(rep)
    {
        return Err(invalid());
    }
    let (mut numer, mut denom) = repeating_ratio(10, whole, pre, rep)?;
    if !tail.is_empty() {
        if !tail.starts_with(|c: char| c == 'e' || c == 'E') {
            return Err(invalid());
        }
        match parse_exponent(text, &tail[1..])? {
            (true, exp) => denom *= pow10(exp),
            (false, exp) => numer *= pow10(exp),
        }
    }
    if negative {
        numer = -numer;
    }
    Ok((numer, denom))
}

/// Parses `[-]digits*[.digits*[(digits+)]]` in `radix` into
/// `(numerator, denominator)`.
pub(crate) fn parse_radix(src: &str, radix: u32) -> Result<(BigInt, BigInt)> {
    check_radix(radix)?;
    let text = trimmed(src)?;
    let invalid = || Error::with_fragment(ErrorKind::InvalidNumber, text);
    let (negative, rest) = split_sign(text);
    let (whole, after) = match rest.find('.') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };
    let (pre, rep) = match after.find('(') {
        Some(i) if after.ends_with(')') => {
            (&after[..i], Some(&after[i + 1..after.len() - 1]))
        }
        Some(_) => return Err(invalid()),
        None => (after, None),
    };
    if whole.is_empty() && pre.is_empty() && rep.is_none() {
        return Err(invalid());
    }
    let hex = |s: &str| s.chars().all(|c| c.is_ascii_hexdigit());
    if !hex(whole) || !hex(pre) || !rep.map_or(true, hex) {
        return Err(invalid());
    }
    let (mut numer, denom) = match rep {
        Some("") => return Err(invalid()),
        Some(rep) => repeating_ratio(radix, whole, pre, rep)?,
        None => {
            let head = format!("{}{}", whole, pre);
            let denom = pow(BigInt::from(radix), pre.len());
            (digits_value(&head, radix)?, denom)
        }
    };
    if negative {
        numer = -numer;
    }
    Ok((numer, denom))
}

/// Prints `digits × 10^-scale` exactly, padding the fraction with
/// zeros up to `min_decimals` places.
pub(crate) fn format_decimal(
    digits: &BigInt,
    scale: usize,
    min_decimals: usize,
) -> String {
    let mut abs = digits.magnitude().to_str_radix(10);
    if abs.len() <= scale {
        let pad = scale + 1 - abs.len();
        abs.insert_str(0, &"0".repeat(pad));
    }
    let point = abs.len() - scale;
    let mut out = String::with_capacity(abs.len() + min_decimals + 2);
    if digits.is_negative() {
        out.push('-');
    }
    out.push_str(&abs[..point]);
    if scale > 0 || min_decimals > 0 {
        out.push('.');
        out.push_str(&abs[point..]);
        if min_decimals > scale {
            out.push_str(&"0".repeat(min_decimals - scale));
        }
    }
    out
}

/// Removes trailing fractional zeros, and the point if nothing is left
/// after it. The exponent part of scientific notation is preserved.
pub(crate) fn trim_zeros(text: &str) -> String {
    let (mantissa, exponent) = match text.find('e') {
        Some(i) => (&text[..i], &text[i..]),
        None => (text, ""),
    };
    if !mantissa.contains('.') {
        return text.to_string();
    }
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", mantissa, exponent)
}

/// Writes `int + numer/denom` in `radix`, where `0 <= numer < denom`.
///
/// The fraction is produced by long division. A remainder seen before
/// closes a repeating group `(...)`; when `max_digits` fraction digits
/// have been written the expansion stops without a group, keeping any
/// trailing zeros.
pub(crate) fn expand_radix(
    negative: bool,
    int: &BigInt,
    numer: &BigInt,
    denom: &BigInt,
    radix: u32,
    max_digits: Option<usize>,
) -> String {
    let mut digits = String::new();
    let mut seen = HashMap::new();
    let mut rem = numer.clone();
    let mut cycle_start = None;
    while !rem.is_zero() {
        if let Some(&pos) = seen.get(&rem) {
            cycle_start = Some(pos);
            break;
        }
        if max_digits.map_or(false, |max| digits.len() >= max) {
            break;
        }
        seen.insert(rem.clone(), digits.len());
        let (digit, next) = (rem * radix).div_rem(denom);
        let digit = digit.to_u32().unwrap_or(0);
        digits.push(std::char::from_digit(digit, radix).unwrap_or('?'));
        rem = next;
    }
    if let Some(pos) = cycle_start {
        digits = format!("{}({})", &digits[..pos], &digits[pos..]);
    }
    let int = int.magnitude().to_str_radix(radix);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int);
    if !digits.is_empty() {
        out.push('.');
        out.push_str(&digits);
    }
    out
}
