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
use crate::rational::Rational;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Eq for Fixed {}

impl Ord for Fixed {
    fn cmp(&self, other: &Fixed) -> Ordering {
        if self.scale == other.scale {
            return self.digits.cmp(&other.digits);
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl PartialEq for Fixed {
    #[inline]
    fn eq(&self, other: &Fixed) -> bool {
        <Fixed as Ord>::cmp(self, other) == Ordering::Equal
    }
}

impl PartialOrd for Fixed {
    #[inline]
    fn partial_cmp(&self, other: &Fixed) -> Option<Ordering> {
        Some(<Fixed as Ord>::cmp(self, other))
    }
}

impl Hash for Fixed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.digits.hash(state);
        n.scale.hash(state);
    }
}

impl PartialEq<BigInt> for Fixed {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.to_integer().map_or(false, |n| n == *other)
    }
}

impl PartialEq<Fixed> for BigInt {
    #[inline]
    fn eq(&self, other: &Fixed) -> bool {
        <Fixed as PartialEq<BigInt>>::eq(other, self)
    }
}

cmp_via_fractions! { Fixed, Rational }

#[cfg(test)]
mod tests {
    use crate::fixed::Fixed;
    use crate::rational::Rational;
    use num_bigint::BigInt;
    use std::cmp::Ordering;
    use std::collections::HashSet;

    fn fixed(s: &str) -> Fixed {
        s.parse().unwrap()
    }

    #[test]
    fn check_cmp() {
        assert_eq!(fixed("1.50"), fixed("1.5"));
        assert!(fixed("-0.001") < fixed("0"));
        assert!(fixed("12.3") > fixed("12.29999"));
        assert_eq!(fixed("100").cmp(&fixed("1e2")), Ordering::Equal);
        assert_eq!(fixed("7.000"), BigInt::from(7));
        assert!(fixed("7.001") != BigInt::from(7));

        let half: Rational = "1/2".parse().unwrap();
        assert_eq!(fixed("0.50"), half);
        assert!(fixed("0.49") < half);
    }

    #[test]
    fn check_hash() {
        let mut set = HashSet::new();
        set.insert(fixed("2.50"));
        assert!(set.contains(&fixed("2.5")));
        assert!(!set.contains(&fixed("0.25")));
    }
}
