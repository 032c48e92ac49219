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

//! Bitwise operations on non-negative integers.
//!
//! The operands are split into 24-bit chunks which are combined with
//! the machine operators and reassembled.

use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{One, Pow, ToPrimitive, Zero};

const CHUNK_BITS: u32 = 24;

fn chunk_base() -> BigInt {
    BigInt::one() << CHUNK_BITS
}

fn combine<F>(a: &BigInt, b: &BigInt, both: bool, op: F) -> BigInt
where
    F: Fn(u32, u32) -> u32,
{
    let base = chunk_base();
    let (mut a, mut b) = (a.clone(), b.clone());
    let mut res = BigInt::zero();
    let mut multiplier = BigInt::one();
    let more = |a: &BigInt, b: &BigInt| {
        let (a, b) = (a > &BigInt::zero(), b > &BigInt::zero());
        if both {
            a && b
        } else {
            a || b
        }
    };
    while more(&a, &b) {
        let (qa, ra) = a.div_rem(&base);
        let (qb, rb) = b.div_rem(&base);
        let chunk = op(ra.to_u32().unwrap_or(0), rb.to_u32().unwrap_or(0));
        res += &multiplier * chunk;
        multiplier *= &base;
        a = qa;
        b = qb;
    }
    res
}

/// `a & b` for non-negative `a` and `b`.
pub(crate) fn and(a: &BigInt, b: &BigInt) -> BigInt {
    combine(a, b, true, |x, y| x & y)
}

/// `a | b` for non-negative `a` and `b`.
pub(crate) fn or(a: &BigInt, b: &BigInt) -> BigInt {
    combine(a, b, false, |x, y| x | y)
}

/// `a ^ b` for non-negative `a` and `b`.
pub(crate) fn xor(a: &BigInt, b: &BigInt) -> BigInt {
    combine(a, b, false, |x, y| x ^ y)
}

#[inline]
pub(crate) fn shift_left(n: &BigInt, bits: usize) -> BigInt {
    n * Pow::pow(BigInt::from(2u32), bits)
}

#[inline]
pub(crate) fn shift_right(n: &BigInt, bits: usize) -> BigInt {
    n.div_floor(&Pow::pow(BigInt::from(2u32), bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn check_chunks() {
        let a = big("340282366920938463463374607431768211455");
        let b = big("18446744073709551616");
        assert_eq!(and(&a, &b), b);
        assert_eq!(or(&a, &b), a);
        assert_eq!(xor(&a, &b), &a - &b);
        assert_eq!(and(&big("0"), &a), big("0"));
        assert_eq!(or(&big("0"), &big("0")), big("0"));
    }

    #[test]
    fn check_small() {
        fn prop(a: u64, b: u64) -> bool {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            and(&x, &y) == BigInt::from(a & b)
                && or(&x, &y) == BigInt::from(a | b)
                && xor(&x, &y) == BigInt::from(a ^ b)
        }
        quickcheck::quickcheck(prop as fn(u64, u64) -> bool);
    }

    #[test]
    fn check_shift() {
        assert_eq!(shift_left(&big("5"), 70), big("5902958103587056517120"));
        assert_eq!(shift_right(&big("5902958103587056517121"), 70), big("5"));
        assert_eq!(shift_right(&big("1"), 1), big("0"));
    }
}
