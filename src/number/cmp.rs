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
use crate::number::{self, Number};
use crate::rational::Rational;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Fixed(a), Number::Fixed(b)) => a.cmp(b),
            (Number::Rational(a), Number::Rational(b)) => a.cmp(b),
            (Number::Fixed(_), Number::Rational(_))
            | (Number::Rational(_), Number::Fixed(_)) => number::cmp_fractions(
                &self.fraction_parts(false),
                &other.fraction_parts(false),
            ),
        }
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Number) -> bool {
        <Number as Ord>::cmp(self, other) == Ordering::Equal
    }
}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        Some(<Number as Ord>::cmp(self, other))
    }
}

// Both representations of a value hash alike.
impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (numer, denom) = self.fraction_parts(true);
        numer.hash(state);
        denom.hash(state);
    }
}

cmp_via_fractions! { Number, Fixed }
cmp_via_fractions! { Number, Rational }
cmp_via_fractions! { Fixed, Number }
cmp_via_fractions! { Rational, Number }

#[cfg(test)]
mod tests {
    use crate::fixed::Fixed;
    use crate::number::Number;
    use crate::rational::Rational;
    use std::collections::HashSet;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn check_cmp() {
        assert_eq!(num("0.50"), num("1/2"));
        assert!(num("0.(3)") > num("0.3333"));
        assert!(num("-2/3") < num("-0.6"));
        assert_eq!(num("12").max(num("25/2")), num("12.5"));
        assert_eq!(num("0.25"), "1/4".parse::<Rational>().unwrap());
        assert!(num("1/4") < "0.26".parse::<Fixed>().unwrap());
        assert!("0.24".parse::<Fixed>().unwrap() < num("1/4"));
    }

    #[test]
    fn check_hash() {
        let mut set = HashSet::new();
        set.insert(num("0.5"));
        assert!(set.contains(&num("2/4")));
        assert!(set.contains(&num("0.500")));
        assert!(!set.contains(&num("0.(5)")));
    }
}
