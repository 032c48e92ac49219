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
use crate::approx::Engine;
use crate::codec;
use crate::error::{Error, ErrorKind, Result};
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use az::Az;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Pow, Signed, ToPrimitive, Zero};
use tracing::trace;

// A starting point no smaller than the root, unless the float
// estimate is off by more than its own precision.
fn seed(t: &BigInt, n: u32) -> BigInt {
    let estimate = t
        .to_f64()
        .filter(|f| f.is_finite())
        .map(|f| f.powf(1.0 / f64::from(n)) * (1.0 + 1e-10))
        .and_then(|r| BigInt::from_f64(r.ceil() + 1.0));
    match estimate {
        Some(s) => s,
        None => {
            let n = n.az::<usize>();
            let digits = (codec::count_digits(t) + n - 1) / n;
            BigInt::from(5) * codec::pow10(digits)
        }
    }
}

/// Returns the largest integer `c` with `c^n <= t`, for `t >= 0`.
///
/// Newton's iteration `c ← ((n − 1)·c + t / c^(n−1)) / n` runs down
/// from the seed until it stops decreasing, then the result is nudged
/// until the bracket holds exactly.
pub(crate) fn int_root(t: &BigInt, n: u32) -> BigInt {
    if t.is_zero() || n == 1 {
        return t.clone();
    }
    let mut c = seed(t, n);
    let mut iterations = 0_u32;
    loop {
        let next = (&c * (n - 1) + t / Pow::pow(&c, n - 1)) / n;
        iterations += 1;
        if next >= c {
            break;
        }
        c = next;
    }
    while Pow::pow(&c, n) > *t {
        c -= 1u32;
    }
    loop {
        let up = &c + 1u32;
        if Pow::pow(&up, n) > *t {
            break;
        }
        c = up;
    }
    trace!(n, iterations, "integer root converged");
    c
}

/// Returns the `n`-th root of `x` truncated at `scale` places; `x` must
/// not be negative when `n` is even.
pub(crate) fn root_trunc(x: &Rational, n: u32, scale: usize) -> Fixed {
    let shift = codec::pow10(scale * n.az::<usize>());
    let radicand = x.numer.abs() * shift / &x.denom;
    let root = int_root(&radicand, n);
    Fixed::from_parts(if x.is_negative() { -root } else { root }, scale)
}

// The exact n-th root of t >= 0, if t is a perfect power.
fn exact_int_root(t: &BigInt, n: u32) -> Option<BigInt> {
    if t.is_zero() || t.is_one() {
        return Some(t.clone());
    }
    if u64::from(n) > t.bits() {
        return None;
    }
    let root = int_root(t, n);
    if Pow::pow(&root, n) == *t {
        Some(root)
    } else {
        None
    }
}

/// Returns the `n`-th root of a positive `x` when it is rational.
pub(crate) fn exact_root(x: &Rational, n: u32) -> Option<Rational> {
    let numer = exact_int_root(&x.numer, n)?;
    let denom = exact_int_root(&x.denom, n)?;
    Some(Rational::from_parts_unchecked(numer, denom))
}

/// The square root of an interval whose values are at least ¼.
pub(crate) fn sqrt_bounded(b: &Bounded) -> Bounded {
    let root = root_trunc(&b.to_rational(), 2, b.prec());
    Bounded::truncated(&root).widen(b.error())
}

fn root_degree<N>(n: N) -> Result<u32>
where
    N: IntoNumber,
{
    n.into_number()?
        .to_integer()
        .filter(|n| n.is_positive())
        .and_then(|n| n.to_u32())
        .ok_or_else(|| Error::new(ErrorKind::InvalidParameter))
}

impl Engine {
    /// Computes the `n`-th root of `x`, truncated at `digits` places.
    ///
    /// `n` must be a positive integer, and `x` must not be negative
    /// when `n` is even.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactnum::approx::Engine;
    /// let engine = Engine::new();
    /// let r = engine.nthroot(3, 2, 10).unwrap();
    /// assert_eq!(r.to_string(), "1.2599210498");
    /// assert!(engine.nthroot(2, -2, 10).is_err());
    /// ```
    pub fn nthroot<N, X>(&self, n: N, x: X, digits: usize) -> Result<Fixed>
    where
        N: IntoNumber,
        X: IntoNumber,
    {
        let n = root_degree(n)?;
        let x = x.into_number()?.to_rational();
        if x.is_negative() && n.is_even() {
            return Err(Error::new(ErrorKind::ComplexResult));
        }
        Ok(root_trunc(&x, n, digits))
    }

    /// Computes the square root.
    #[inline]
    pub fn sqrt<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        self.nthroot(2, x, digits)
    }

    /// Computes the cube root.
    #[inline]
    pub fn cbrt<X>(&self, x: X, digits: usize) -> Result<Fixed>
    where
        X: IntoNumber,
    {
        self.nthroot(3, x, digits)
    }
}
