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

use crate::rational::Rational;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn neg(op: &Rational) -> Rational {
    Rational::from_parts_unchecked(-&op.numer, op.denom.clone())
}

fn add(lhs: &Rational, rhs: &Rational) -> Rational {
    if lhs.denom == rhs.denom {
        return Rational::reduced(&lhs.numer + &rhs.numer, lhs.denom.clone());
    }
    let numer = &lhs.numer * &rhs.denom + &rhs.numer * &lhs.denom;
    Rational::reduced(numer, &lhs.denom * &rhs.denom)
}

fn sub(lhs: &Rational, rhs: &Rational) -> Rational {
    add(lhs, &neg(rhs))
}

fn mul(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::reduced(&lhs.numer * &rhs.numer, &lhs.denom * &rhs.denom)
}

arith_unary! { Rational; neg; Neg neg }
arith_binary! { Rational; add; Add add; AddAssign add_assign }
arith_binary! { Rational; sub; Sub sub; SubAssign sub_assign }
arith_binary! { Rational; mul; Mul mul; MulAssign mul_assign }

sum_prod! { Rational, Rational::new(), Rational::from(1) }

#[cfg(test)]
mod tests {
    use crate::rational::Rational;

    fn ratio(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn check_ref_op() {
        let lhs = ratio("-13/27");
        let rhs = ratio("15/101");
        assert_eq!(-&lhs, ratio("13/27"));
        assert_eq!(&lhs + &rhs, ratio("-908/2727"));
        assert_eq!(lhs.clone() + &rhs, &lhs + rhs.clone());
        assert_eq!(&lhs - &rhs, ratio("-1718/2727"));
        assert_eq!(&lhs * &rhs, ratio("-65/909"));
        assert_eq!((&lhs * &rhs).denom().to_string(), "909");

        let mut acc = lhs.clone();
        acc += &rhs;
        acc -= rhs.clone();
        acc *= ratio("27/13");
        assert_eq!(acc, ratio("-1"));
    }

    #[test]
    fn check_same_denom() {
        let sum = ratio("1/6") + ratio("1/6");
        assert_eq!(sum.to_fraction(), "1/3");
        assert_eq!(sum.denom().to_string(), "3");
        let diff = ratio("1/6") - ratio("1/6");
        assert_eq!(diff.to_fraction(), "0/1");
    }

    #[test]
    fn check_sum_prod() {
        let values = [ratio("1/2"), ratio("1/3"), ratio("1/6")];
        assert_eq!(values.iter().sum::<Rational>(), ratio("1"));
        assert_eq!(values.iter().product::<Rational>(), ratio("1/36"));
        assert_eq!(
            Vec::<Rational>::new().into_iter().product::<Rational>(),
            ratio("1")
        );
    }
}
