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

use crate::fixed::Fixed;
use crate::number::Number;
use crate::rational::Rational;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn neg(op: &Number) -> Number {
    match op {
        Number::Fixed(f) => Number::Fixed(-f),
        Number::Rational(r) => Number::Rational(-r),
    }
}

fn add(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Fixed(a), Number::Fixed(b)) => Number::Fixed(a + b),
        (Number::Fixed(a), Number::Rational(b)) => Number::Rational(a.to_rational() + b),
        (Number::Rational(a), Number::Fixed(b)) => Number::Rational(a + b.to_rational()),
        (Number::Rational(a), Number::Rational(b)) => Number::Rational(a + b),
    }
}

fn sub(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Fixed(a), Number::Fixed(b)) => Number::Fixed(a - b),
        (Number::Fixed(a), Number::Rational(b)) => Number::Rational(a.to_rational() - b),
        (Number::Rational(a), Number::Fixed(b)) => Number::Rational(a - b.to_rational()),
        (Number::Rational(a), Number::Rational(b)) => Number::Rational(a - b),
    }
}

fn mul(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Fixed(a), Number::Fixed(b)) => Number::Fixed(a * b),
        (Number::Fixed(a), Number::Rational(b)) => Number::Rational(a.to_rational() * b),
        (Number::Rational(a), Number::Fixed(b)) => Number::Rational(a * b.to_rational()),
        (Number::Rational(a), Number::Rational(b)) => Number::Rational(a * b),
    }
}

arith_unary! { Number; neg; Neg neg }
arith_binary! { Number; add; Add add; AddAssign add_assign }
arith_binary! { Number; sub; Sub sub; SubAssign sub_assign }
arith_binary! { Number; mul; Mul mul; MulAssign mul_assign }

sum_prod! {
    Number,
    Number::Fixed(Fixed::new()),
    Number::Fixed(Fixed::from(1))
}

impl From<Fixed> for Number {
    #[inline]
    fn from(val: Fixed) -> Number {
        Number::Fixed(val)
    }
}

impl From<Rational> for Number {
    #[inline]
    fn from(val: Rational) -> Number {
        Number::Rational(val)
    }
}

#[cfg(test)]
mod tests {
    use crate::number::Number;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn check_dispatch() {
        let sum = num("0.1") + num("0.2");
        assert!(sum.is_fixed());
        assert_eq!(sum.to_string(), "0.3");
        let sum = num("0.1") + num("1/3");
        assert!(!sum.is_fixed());
        assert_eq!(sum.to_fraction(), "13/30");
        let diff = num("1/3") - num("0.5");
        assert_eq!(diff.to_string(), "-0.1(6)");
        let prod = num("1/3") * num("1/3");
        assert_eq!(prod.to_fraction(), "1/9");
        assert_eq!((-num("2/3")).to_fraction(), "-2/3");
        assert_eq!((-&num("2.5")).to_string(), "-2.5");
    }

    #[test]
    fn check_assign_and_sum() {
        let mut acc = num("1");
        acc += num("1/2");
        acc -= &num("0.25");
        acc *= num("4");
        assert_eq!(acc, num("5"));
        let values = vec![num("0.5"), num("1/3"), num("1/6")];
        assert_eq!(values.iter().sum::<Number>(), num("1"));
        assert_eq!(values.into_iter().product::<Number>(), num("1/36"));
    }

    #[test]
    fn check_ring_identities() {
        fn prop(a: i32, b: i32, c: u16) -> bool {
            let a = Number::from_ratio(a, i64::from(c) + 1).unwrap();
            let b: Number = b.into();
            (&a + &b) - &b == a && &a * (&b + &a) == &a * &b + &a * &a
        }
        quickcheck::quickcheck(prop as fn(i32, i32, u16) -> bool);
    }
}
