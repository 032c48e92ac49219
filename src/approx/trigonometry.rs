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

use crate::approx::bounded::{self, Bounded};
use crate::approx::roots;
use crate::approx::series::{self, Taylor};
use crate::approx::Engine;
use crate::codec;
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// An angle reduced modulo 2π.
enum Reduced {
    /// Exactly `m·15°`, with `m` in `0..24`.
    Special(u32),
    /// The quadrant in `0..4` and the angle left inside it.
    General(u32, Bounded),
}

fn exact(x: i64, prec: usize) -> Bounded {
    Bounded::exact(&Rational::from(x), prec)
}

fn surd(n: i64, prec: usize) -> Bounded {
    Bounded::truncated(&roots::root_trunc(&Rational::from(n), 2, prec))
}

// sin(r·15°) for r in 0..=6
fn sin_table(r: u32, prec: usize) -> Bounded {
    match r {
        0 => exact(0, prec),
        1 => (surd(6, prec) - surd(2, prec)).div_int(4),
        2 => {
            let half = Rational::from_parts_unchecked(BigInt::from(1), BigInt::from(2));
            Bounded::exact(&half, prec)
        }
        3 => surd(2, prec).div_int(2),
        4 => surd(3, prec).div_int(2),
        5 => (surd(6, prec) + surd(2, prec)).div_int(4),
        _ => exact(1, prec),
    }
}

// tan(t·15°) for t in 0..6
fn tan_table(t: u32, prec: usize) -> Bounded {
    match t {
        0 => exact(0, prec),
        1 => exact(2, prec) - surd(3, prec),
        2 => surd(3, prec).div_int(3),
        3 => exact(1, prec),
        4 => surd(3, prec),
        _ => exact(2, prec) + surd(3, prec),
    }
}

fn special_sin(m: u32, prec: usize) -> Bounded {
    let (quadrant, r) = (m / 6, m % 6);
    match quadrant {
        0 => sin_table(r, prec),
        1 => sin_table(6 - r, prec),
        2 => -sin_table(r, prec),
        _ => -sin_table(6 - r, prec),
    }
}

fn special_cos(m: u32, prec: usize) -> Bounded {
    special_sin((m + 6) % 24, prec)
}

fn special_tan(m: u32, prec: usize) -> Result<Bounded> {
    match m % 12 {
        6 => Err(Error::new(ErrorKind::OutOfRange)),
        t if t < 6 => Ok(tan_table(t, prec)),
        t => Ok(-tan_table(12 - t, prec)),
    }
}

// cos(a) for a reference angle in about [0, π/2]
fn cos_reference(a: &Bounded) -> Bounded {
    series::sum_series(Taylor::cos(&a.to_rational()), a.prec()).widen(a.error())
}

// sin(a) = cos(π/2 − a)
fn sin_reference(a: &Bounded, half_pi: &Bounded) -> Bounded {
    cos_reference(&(half_pi - a))
}

// floor(x / y) for an interval y well away from zero
fn floor_quotient(x: &Bounded, y: &Bounded) -> Result<BigInt> {
    let quot = x.to_rational().div(&y.to_rational())?;
    Ok(quot.floor(0).into_parts().0)
}

fn sin_of(reduced: Reduced, half_pi: &Bounded, prec: usize) -> Bounded {
    match reduced {
        Reduced::Special(m) => special_sin(m, prec),
        Reduced::General(quadrant, a) => match quadrant {
            0 => sin_reference(&a, half_pi),
            1 => cos_reference(&a),
            2 => -sin_reference(&a, half_pi),
            _ => -cos_reference(&a),
        },
    }
}

fn cos_of(reduced: Reduced, half_pi: &Bounded, prec: usize) -> Bounded {
    match reduced {
        Reduced::Special(m) => special_cos(m, prec),
        Reduced::General(quadrant, a) => match quadrant {
            0 => cos_reference(&a),
            1 => -sin_reference(&a, half_pi),
            2 => -cos_reference(&a),
            _ => sin_reference(&a, half_pi),
        },
    }
}

fn tan_of(reduced: Reduced, half_pi: &Bounded, prec: usize) -> Result<Bounded> {
    match reduced {
        Reduced::Special(m) => special_tan(m, prec),
        Reduced::General(quadrant, a) => {
            let (sin, cos) = (sin_reference(&a, half_pi), cos_reference(&a));
            Ok(match quadrant {
                0 | 2 => sin / cos,
                _ => -(cos / sin),
            })
        }
    }
}

impl Engine {
    pub(crate) fn pi_bounded(&self, prec: usize) -> Result<Bounded> {
        Ok(Bounded::truncated(&self.pi.get(prec)?))
    }

    /// Reduces an angle in radians modulo 2π at `prec` places.
    ///
    /// No nonzero rational is a multiple of 15°, so only zero takes
    /// the exact path.
    fn evaluate_angle(&self, angle: &Rational, prec: usize) -> Result<(Reduced, Bounded)> {
        // every whole turn taken off costs the error of 2π once
        let turn_digits = codec::count_digits(angle.int_part().digits());
        let work = prec + turn_digits + 2;
        let pi = self.pi_bounded(work)?;
        let half_pi = pi.div_int(2);
        if angle.is_zero() {
            return Ok((Reduced::Special(0), half_pi));
        }
        let two_pi = pi.mul_int(&BigInt::from(2));
        let x = Bounded::exact(angle, work);
        let turns = floor_quotient(&x, &two_pi)?;
        let rest = &x - &two_pi.mul_int(&turns);

        let quadrant = floor_quotient(&rest, &half_pi)?;
        let reference = &rest - &half_pi.mul_int(&quadrant);
        let quadrant = quadrant.mod_floor(&BigInt::from(4)).to_u32().unwrap_or(0);
        Ok((Reduced::General(quadrant, reference), half_pi))
    }

    /// Reduces the angle `turns·π`, which is known exactly, so the
    /// multiples of 15° are recognized without error.
    fn evaluate_pi_multiple(&self, turns: &Rational, prec: usize) -> Result<(Reduced, Bounded)> {
        let work = prec + 2;
        let pi = self.pi_bounded(work)?;
        let half_pi = pi.div_int(2);
        let twelfths = turns * &Rational::from(12);
        if twelfths.is_integer() {
            let m = twelfths.int_part().into_parts().0;
            let m = m.mod_floor(&BigInt::from(24)).to_u32().unwrap_or(0);
            return Ok((Reduced::Special(m), half_pi));
        }
        let halves = turns * &Rational::from(2);
        let quadrant = halves.floor(0).into_parts().0;
        let inside = &halves - &Rational::from(quadrant.clone());
        let reference = half_pi.mul_ratio(&inside);
        let quadrant = quadrant.mod_floor(&BigInt::from(4)).to_u32().unwrap_or(0);
        Ok((Reduced::General(quadrant, reference), half_pi))
    }

    /// Computes the sine of `angle` in radians, truncated at `digits`
    /// places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.sin(1, 10).unwrap().to_string(), "0.8414709848");
    /// let pi = engine.pi(30).unwrap();
    /// assert_eq!(engine.sin(pi, 10).unwrap().to_string(), "0");
    /// ```
    pub fn sin<T>(&self, angle: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let angle = angle.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_angle(&angle, prec)?;
            Ok(sin_of(reduced, &half_pi, prec))
        })
    }

    /// Computes the cosine of `angle` in radians.
    pub fn cos<T>(&self, angle: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let angle = angle.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_angle(&angle, prec)?;
            Ok(cos_of(reduced, &half_pi, prec))
        })
    }

    /// Computes the tangent of `angle` in radians.
    ///
    /// Angles close to 90° give large but finite results.
    pub fn tan<T>(&self, angle: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let angle = angle.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_angle(&angle, prec)?;
            tan_of(reduced, &half_pi, prec)
        })
    }

    /// Computes sin(π·`turns`); multiples of 15° are exact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// assert_eq!(engine.sin_pi("1/6", 10).unwrap().to_string(), "0.5");
    /// assert_eq!(engine.sin_pi("1/8", 10).unwrap().to_string(), "0.3826834323");
    /// ```
    pub fn sin_pi<T>(&self, turns: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let turns = turns.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_pi_multiple(&turns, prec)?;
            Ok(sin_of(reduced, &half_pi, prec))
        })
    }

    /// Computes cos(π·`turns`).
    pub fn cos_pi<T>(&self, turns: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let turns = turns.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_pi_multiple(&turns, prec)?;
            Ok(cos_of(reduced, &half_pi, prec))
        })
    }

    /// Computes tan(π·`turns`).
    ///
    /// Fails with [`OutOfRange`](../enum.ErrorKind.html) when `turns`
    /// is ½ plus an integer.
    pub fn tan_pi<T>(&self, turns: T, digits: usize) -> Result<Fixed>
    where
        T: IntoNumber,
    {
        let turns = turns.into_number()?.to_rational();
        bounded::certify(digits, |prec| {
            let (reduced, half_pi) = self.evaluate_pi_multiple(&turns, prec)?;
            tan_of(reduced, &half_pi, prec)
        })
    }
}
