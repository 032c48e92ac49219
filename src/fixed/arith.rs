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
use num_bigint::BigInt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn neg(op: &Fixed) -> Fixed {
    Fixed::from_parts(-&op.digits, op.scale)
}

fn add(lhs: &Fixed, rhs: &Fixed) -> Fixed {
    let (a, b, scale) = lhs.aligned(rhs);
    Fixed::from_parts(a + b, scale)
}

fn sub(lhs: &Fixed, rhs: &Fixed) -> Fixed {
    let (a, b, scale) = lhs.aligned(rhs);
    Fixed::from_parts(a - b, scale)
}

fn mul(lhs: &Fixed, rhs: &Fixed) -> Fixed {
    let digits: BigInt = &lhs.digits * &rhs.digits;
    Fixed::from_parts(digits, lhs.scale + rhs.scale)
}

arith_unary! { Fixed; neg; Neg neg }
arith_binary! { Fixed; add; Add add; AddAssign add_assign }
arith_binary! { Fixed; sub; Sub sub; SubAssign sub_assign }
arith_binary! { Fixed; mul; Mul mul; MulAssign mul_assign }

sum_prod! { Fixed, Fixed::new(), Fixed::from(1) }
