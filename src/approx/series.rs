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

use crate::approx::bounded::Bounded;
use crate::codec;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// A series evaluated term by term.
///
/// Terms are exact fractions and only get rounded when they are added
/// to the sum. Past the first term that is smaller than the working
/// precision the terms must shrink at least geometrically, so that the
/// tail is worth less than two units.
pub(crate) trait Series {
    /// Returns the current term as `(numerator, denominator)` with a
    /// positive denominator, and advances to the next term.
    fn step(&mut self) -> (BigInt, BigInt);
}

/// Sums `series` at `prec` places, stopping at the first term below
/// one unit.
pub(crate) fn sum_series<S>(mut series: S, prec: usize) -> Bounded
where
    S: Series,
{
    let unit = codec::pow10(prec);
    let mut sum = BigInt::zero();
    let mut terms = 0_u64;
    loop {
        let (numer, denom) = series.step();
        let scaled = numer * &unit / denom;
        terms += 1;
        if scaled.is_zero() {
            break;
        }
        sum += scaled;
    }
    Bounded::new(sum, BigInt::from(terms + 2), prec)
}

/// Terms `x^k / k!` for every `stride`-th `k`, with the sign optionally
/// alternating.
pub(crate) struct Taylor {
    numer: BigInt,
    denom: BigInt,
    x_numer: BigInt,
    x_denom: BigInt,
    index: u64,
    stride: u32,
}

impl Taylor {
    fn with_start(x: &Rational, odd: bool, stride: u32, alternate: bool) -> Taylor {
        let (numer, denom, index) = if odd {
            (x.numer.clone(), x.denom.clone(), 1)
        } else {
            (BigInt::one(), BigInt::one(), 0)
        };
        let mut x_numer = x.numer.pow(stride);
        if alternate {
            x_numer = -x_numer;
        }
        Taylor {
            numer,
            denom,
            x_numer,
            x_denom: x.denom.pow(stride),
            index,
            stride,
        }
    }

    /// `1 + x + x²/2! + ...`
    pub(crate) fn exp(x: &Rational) -> Taylor {
        Taylor::with_start(x, false, 1, false)
    }

    /// `1 − x²/2! + x⁴/4! − ...`
    pub(crate) fn cos(x: &Rational) -> Taylor {
        Taylor::with_start(x, false, 2, true)
    }

    /// `1 + x²/2! + x⁴/4! + ...`
    pub(crate) fn cosh(x: &Rational) -> Taylor {
        Taylor::with_start(x, false, 2, false)
    }

    /// `x + x³/3! + x⁵/5! + ...`
    pub(crate) fn sinh(x: &Rational) -> Taylor {
        Taylor::with_start(x, true, 2, false)
    }
}

impl Series for Taylor {
    fn step(&mut self) -> (BigInt, BigInt) {
        let term = (self.numer.clone(), self.denom.clone());
        let mut factorial = BigInt::one();
        for i in 1..=u64::from(self.stride) {
            factorial *= self.index + i;
        }
        self.numer *= &self.x_numer;
        self.denom *= &self.x_denom * factorial;
        self.index += u64::from(self.stride);
        term
    }
}

/// Terms `x^(2k+1) / (2k+1)`, with the sign optionally alternating.
pub(crate) struct OddPowers {
    power_numer: BigInt,
    power_denom: BigInt,
    square_numer: BigInt,
    square_denom: BigInt,
    k: u64,
}

impl OddPowers {
    fn new(x: &Rational, alternate: bool) -> OddPowers {
        let square_numer = &x.numer * &x.numer;
        OddPowers {
            power_numer: x.numer.clone(),
            power_denom: x.denom.clone(),
            square_numer: if alternate { -square_numer } else { square_numer },
            square_denom: &x.denom * &x.denom,
            k: 0,
        }
    }

    /// `x − x³/3 + x⁵/5 − ...`, the arctangent.
    pub(crate) fn atan(x: &Rational) -> OddPowers {
        OddPowers::new(x, true)
    }

    /// `x + x³/3 + x⁵/5 + ...`, the inverse hyperbolic tangent.
    pub(crate) fn atanh(x: &Rational) -> OddPowers {
        OddPowers::new(x, false)
    }
}

impl Series for OddPowers {
    fn step(&mut self) -> (BigInt, BigInt) {
        let term = (
            self.power_numer.clone(),
            &self.power_denom * (2 * self.k + 1),
        );
        self.power_numer *= &self.square_numer;
        self.power_denom *= &self.square_denom;
        self.k += 1;
        term
    }
}

/// `6·asin(1/2) = 3 + 3·(1/2)(1/3)(1/4) + ...`
///
/// The coefficient of term `k` is `3·(2k)! / (16^k·(k!)²)`, each one
/// obtained from the previous by the factor `(2k+1) / (8(k+1))`.
pub(crate) struct PiSeries {
    numer: BigInt,
    denom: BigInt,
    k: u64,
}

impl PiSeries {
    pub(crate) fn new() -> PiSeries {
        PiSeries {
            numer: BigInt::from(3),
            denom: BigInt::one(),
            k: 0,
        }
    }
}

impl Series for PiSeries {
    fn step(&mut self) -> (BigInt, BigInt) {
        let odd = 2 * self.k + 1;
        let term = (self.numer.clone(), &self.denom * odd);
        self.numer *= odd;
        self.denom *= 8 * (self.k + 1);
        self.k += 1;
        term
    }
}
