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
Approximations of transcendental functions and irrational roots.

Every function takes the number of decimal places `digits` and returns
a [`Fixed`](../struct.Fixed.html) holding the true result truncated
towards zero at that many places. Internally each evaluation carries
guard digits together with an explicit error bound, and is repeated
with more guard digits when the bound does not settle the last place.
As a consequence a result computed at fewer places is always a prefix
of one computed at more places.

The free functions use a process-wide [`Engine`](struct.Engine.html)
whose constant caches are shared by all threads; an `Engine` created
with [`Engine::new`](struct.Engine.html#method.new) has caches of its
own.

# Examples

```rust
use exactnum::approx;
assert_eq!(approx::pi(10).unwrap().to_string(), "3.1415926535");
let root = approx::nthroot(2, 3, 20).unwrap();
assert_eq!(root.to_string(), "1.73205080756887729352");
assert_eq!(approx::log10(1000, 5).unwrap().to_string(), "3");
```
*/

mod bounded;
mod constant;
mod exponential;
mod hyperbolic;
mod inverse_hyperbolic;
mod inverse_trigonometry;
mod logarithm;
mod roots;
mod series;
mod trigonometry;

pub use self::constant::ConstantCache;

use crate::error::Result;
use crate::fixed::Fixed;
use crate::number::IntoNumber;
use crate::rational::Rational;
use once_cell::sync::Lazy;

/// Places of π kept by the cache.
pub const PI_CACHE_DIGITS: usize = 1000;
/// Places of ln 2 and ln 10 kept by the caches.
pub const LN_CACHE_DIGITS: usize = 200;

static SHARED: Lazy<Engine> = Lazy::new(Engine::new);

/// Evaluates approximations, holding the caches of π, ln 2 and ln 10.
///
/// # Examples
///
/// ```rust
/// use exactnum::approx::Engine;
/// let engine = Engine::new();
/// assert_eq!(engine.pi(5).unwrap().to_string(), "3.14159");
/// assert_eq!(engine.cos(0, 5).unwrap().to_string(), "1");
/// ```
#[derive(Debug)]
pub struct Engine {
    pi: ConstantCache,
    ln2: ConstantCache,
    ln10: ConstantCache,
}

impl Default for Engine {
    #[inline]
    fn default() -> Engine {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with empty caches.
    pub fn new() -> Engine {
        Engine {
            pi: ConstantCache::new("pi", PI_CACHE_DIGITS, |digits| {
                bounded::certify(digits, |prec| {
                    Ok(series::sum_series(series::PiSeries::new(), prec))
                })
            }),
            ln2: ConstantCache::new("ln2", LN_CACHE_DIGITS, |digits| {
                let two = Rational::from(2);
                bounded::certify(digits, |prec| logarithm::ln_bounded(&two, prec))
            }),
            ln10: ConstantCache::new("ln10", LN_CACHE_DIGITS, |digits| {
                let ten = Rational::from(10);
                bounded::certify(digits, |prec| logarithm::ln_bounded(&ten, prec))
            }),
        }
    }

    /// Returns the engine used by the free functions of this module.
    #[inline]
    pub fn shared() -> &'static Engine {
        &SHARED
    }

    /// Returns π truncated at `digits` places.
    #[inline]
    pub fn pi(&self, digits: usize) -> Result<Fixed> {
        self.pi.get(digits)
    }

    /// Returns ln 2 truncated at `digits` places.
    #[inline]
    pub fn ln2(&self, digits: usize) -> Result<Fixed> {
        self.ln2.get(digits)
    }

    /// Returns ln 10 truncated at `digits` places.
    #[inline]
    pub fn ln10(&self, digits: usize) -> Result<Fixed> {
        self.ln10.get(digits)
    }
}

/// Returns π truncated at `digits` places.
pub fn pi(digits: usize) -> Result<Fixed> {
    Engine::shared().pi(digits)
}

macro_rules! shared_unary {
    { $($(#[$attr:meta])* $name:ident;)* } => {
        $(
            $(#[$attr])*
            pub fn $name<X>(x: X, digits: usize) -> Result<Fixed>
            where
                X: IntoNumber,
            {
                Engine::shared().$name(x, digits)
            }
        )*
    }
}

shared_unary! {
    /// Computes e<sup>x</sup>.
    exp;
    /// Computes the natural logarithm.
    ln;
    /// Computes the base 2 logarithm.
    log2;
    /// Computes the base 10 logarithm.
    log10;
    /// Computes the square root.
    sqrt;
    /// Computes the cube root.
    cbrt;
    /// Computes the sine of an angle in radians.
    sin;
    /// Computes the cosine of an angle in radians.
    cos;
    /// Computes the tangent of an angle in radians.
    tan;
    /// Computes the sine of π times the argument.
    sin_pi;
    /// Computes the cosine of π times the argument.
    cos_pi;
    /// Computes the tangent of π times the argument.
    tan_pi;
    /// Computes the arcsine.
    asin;
    /// Computes the arccosine.
    acos;
    /// Computes the arctangent.
    atan;
    /// Computes the hyperbolic sine.
    sinh;
    /// Computes the hyperbolic cosine.
    cosh;
    /// Computes the hyperbolic tangent.
    tanh;
    /// Computes the inverse hyperbolic sine.
    asinh;
    /// Computes the inverse hyperbolic cosine.
    acosh;
    /// Computes the inverse hyperbolic tangent.
    atanh;
}

/// Computes the logarithm of `x` to the given `base`.
pub fn logn<B, X>(base: B, x: X, digits: usize) -> Result<Fixed>
where
    B: IntoNumber,
    X: IntoNumber,
{
    Engine::shared().logn(base, x, digits)
}

/// Computes `base` raised to `exp`.
pub fn pow<B, E>(base: B, exp: E, digits: usize) -> Result<Fixed>
where
    B: IntoNumber,
    E: IntoNumber,
{
    Engine::shared().pow(base, exp, digits)
}

/// Computes the `n`-th root of `x`.
pub fn nthroot<N, X>(n: N, x: X, digits: usize) -> Result<Fixed>
where
    N: IntoNumber,
    X: IntoNumber,
{
    Engine::shared().nthroot(n, x, digits)
}

#[cfg(test)]
mod tests {
    use crate::approx::{self, Engine};
    use crate::error::Result;
    use crate::fixed::Fixed;

    const PI_100: &str = "3.1415926535897932384626433832795028841971693993751\
                          058209749445923078164062862089986280348253421170679";

    #[test]
    fn check_pi() {
        let engine = Engine::new();
        assert_eq!(engine.pi(0).unwrap().to_string(), "3");
        assert_eq!(engine.pi(10).unwrap().to_string(), "3.1415926535");
        assert_eq!(engine.pi(100).unwrap().to_string(), PI_100);
        let prefix = |len: usize| PI_100[..len].parse::<Fixed>().unwrap();
        assert_eq!(engine.pi(20).unwrap(), prefix(22));
        assert_eq!(approx::pi(50).unwrap(), prefix(52));
        assert_eq!(approx::pi(50).unwrap().to_string(), &PI_100[..51]);
    }

    #[test]
    fn check_log_constants() {
        let engine = Engine::new();
        assert_eq!(engine.ln2(30).unwrap().to_string(), "0.693147180559945309417232121458");
        assert_eq!(engine.ln10(20).unwrap().to_string(), "2.30258509299404568401");
        let shared = Engine::shared();
        assert_eq!(shared.ln2(5).unwrap().to_string(), "0.69314");
    }

    type Func = fn(&Engine, &str, usize) -> Result<Fixed>;

    #[test]
    fn check_prefix_stability() {
        let funcs: [(&str, Func); 12] = [
            ("exp", |e, x, d| e.exp(x, d)),
            ("ln", |e, x, d| e.ln(x, d)),
            ("sqrt", |e, x, d| e.sqrt(x, d)),
            ("sin", |e, x, d| e.sin(x, d)),
            ("cos", |e, x, d| e.cos(x, d)),
            ("tan", |e, x, d| e.tan(x, d)),
            ("atan", |e, x, d| e.atan(x, d)),
            ("asin", |e, x, d| e.asin(x, d)),
            ("sinh", |e, x, d| e.sinh(x, d)),
            ("tanh", |e, x, d| e.tanh(x, d)),
            ("asinh", |e, x, d| e.asinh(x, d)),
            ("atanh", |e, x, d| e.atanh(x, d)),
        ];
        let engine = Engine::new();
        for &x in ["0.7", "-0.35", "1/7"].iter() {
            for &(name, f) in funcs.iter() {
                if (name == "ln" || name == "sqrt") && x.starts_with('-') {
                    continue;
                }
                let long = f(&engine, x, 80).unwrap();
                for &d in [1, 5, 17, 40].iter() {
                    let short = f(&engine, x, d).unwrap();
                    assert_eq!(short, long.trunc(d), "{}({}) at {}", name, x, d);
                }
            }
        }
    }

    #[test]
    fn check_prefix_stability_near_exact_values() {
        let engine = Engine::new();
        let angles = ["0.5235987755", "1.5707963267948966", "-0.7853981634", "3.1415926535"];
        for &x in angles.iter() {
            let long = (engine.sin(x, 60).unwrap(), engine.cos(x, 60).unwrap());
            let tan = engine.tan(x, 60).unwrap();
            for &d in [0, 3, 9, 10, 11, 25].iter() {
                assert_eq!(engine.sin(x, d).unwrap(), long.0.trunc(d), "sin({}) at {}", x, d);
                assert_eq!(engine.cos(x, d).unwrap(), long.1.trunc(d), "cos({}) at {}", x, d);
                assert_eq!(engine.tan(x, d).unwrap(), tan.trunc(d), "tan({}) at {}", x, d);
            }
        }
        let logs = [(4, 8), (8, 4), (100, 1000), (3, 10), (27, 3)];
        for &(base, x) in logs.iter() {
            let long = engine.logn(base, x, 60).unwrap();
            for &d in [0, 1, 7, 30].iter() {
                let short = engine.logn(base, x, d).unwrap();
                assert_eq!(short, long.trunc(d), "logn({}, {}) at {}", base, x, d);
            }
        }
    }

    #[test]
    fn check_against_f64() {
        let engine = Engine::new();
        for k in 1..60 {
            let x = format!("{}/16", k * 5 - 150);
            let f = f64::from(k * 5 - 150) / 16.0;
            let close = |a: f64, b: f64| (a - b).abs() <= 1e-10 * b.abs().max(1.0);
            let exp = engine.exp(x.as_str(), 20).unwrap().to_f64();
            assert!(close(exp, f.exp()), "exp {}", x);
            let atan = engine.atan(x.as_str(), 20).unwrap().to_f64();
            assert!(close(atan, f.atan()), "atan {}", x);
            let sinh = engine.sinh(x.as_str(), 20).unwrap().to_f64();
            assert!(close(sinh, f.sinh()), "sinh {}", x);
            if f > 0.0 {
                let ln = engine.ln(x.as_str(), 20).unwrap().to_f64();
                assert!(close(ln, f.ln()), "ln {}", x);
                let sqrt = engine.sqrt(x.as_str(), 20).unwrap().to_f64();
                assert!(close(sqrt, f.sqrt()), "sqrt {}", x);
            }
        }
    }

    #[test]
    fn check_shared_functions() {
        assert_eq!(approx::exp(1, 5).unwrap().to_string(), "2.71828");
        assert_eq!(approx::logn(2, 32, 5).unwrap().to_string(), "5");
        assert_eq!(approx::pow(9, "0.5", 5).unwrap().to_string(), "3");
        assert_eq!(approx::cbrt(8, 5).unwrap().to_string(), "2");
        assert_eq!(approx::acosh(1, 5).unwrap().to_string(), "0");
        assert!(approx::ln(-1, 5).is_err());
    }
}
