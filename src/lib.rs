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
# Exact decimal and rational arithmetic

This crate provides arbitrary-precision numbers that never lose
information silently:

* [`Fixed`](struct.Fixed.html) is a decimal fixed-point number, an
  integer with a decimal scale.
* [`Rational`](struct.Rational.html) is a fraction kept in lowest
  terms with a positive denominator.
* [`Number`](number/enum.Number.html) is either of the two and
  coerces between them as the operations require.

Values can be parsed from and printed in any radix from 2 to 16, with
repeating digits written in parentheses, as in `"0.(3)"`. Rounding
takes one of nine [`RoundingMode`](enum.RoundingMode.html)s, and the
remainder follows one of three [`ModType`](enum.ModType.html)s.

Functions that cannot give exact results, such as roots, logarithms
and trigonometric functions, live in the [`approx`](approx/index.html)
module. They take a number of decimal places and return the true value
truncated at that place.

## Examples

```rust
use exactnum::{approx, Fixed, Number, Rational, RoundingMode};

let a: Fixed = "0.1".parse().unwrap();
let b: Fixed = "0.2".parse().unwrap();
assert_eq!((a + b).to_string(), "0.3");

let third: Rational = "1/3".parse().unwrap();
assert_eq!(third.to_string(), "0.(3)");
assert_eq!(third.round(4, RoundingMode::NearestToEven).to_string(), "0.3333");

let n: Number = "1/7".parse().unwrap();
assert_eq!(n.to_string_radix(2, None).unwrap(), "0.(001)");

assert_eq!(approx::sqrt(2, 10).unwrap().to_string(), "1.4142135623");
```

## Optional features

* `serde`, off by default, implements
  [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and
  [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
  for the number types and the rounding enumerations.
*/
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod bitwise;
mod codec;
mod error;
mod fixed;
mod rational;
mod round;
#[cfg(feature = "serde")]
mod serdeize;

pub mod approx;
pub mod number;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::fixed::Fixed;
pub use crate::number::{IntoNumber, Number};
pub use crate::rational::Rational;
pub use crate::round::{ModType, RoundingMode};
