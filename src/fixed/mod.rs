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

/*!
Exact decimal numbers.

A [`Fixed`](struct.Fixed.html) is an arbitrary-precision integer with a
decimal scale. Addition, subtraction and multiplication are exact and
stay fixed-point; division produces a
[`Rational`](../struct.Rational.html).
*/

mod arith;
pub(crate) mod big;
mod cmp;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use self::big::Fixed;
