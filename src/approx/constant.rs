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

use crate::error::Result;
use crate::fixed::Fixed;
use parking_lot::Mutex;
use std::fmt::{self, Debug, Formatter};
use tracing::debug;

type Generator = Box<dyn Fn(usize) -> Result<Fixed> + Send + Sync>;

/// A constant memoized at the highest precision requested so far.
///
/// The generator must return the constant truncated at the requested
/// number of decimal places. Requests at or below the cached
/// precision are served by truncating the cached value; larger
/// requests run the generator while holding the lock, and keep at most
/// `cap` places of the new value.
///
/// # Examples
///
/// ```rust
/// use exactnum::approx::ConstantCache;
/// use exactnum::Fixed;
/// let third = ConstantCache::new("third", 50, |digits| {
///     Ok(Fixed::from(1).div(&Fixed::from(3))?.trunc(digits))
/// });
/// assert_eq!(third.get(4).unwrap().to_string(), "0.3333");
/// assert_eq!(third.cached_digits(), Some(4));
/// assert_eq!(third.get(2).unwrap().to_string(), "0.33");
/// ```
pub struct ConstantCache {
    name: &'static str,
    cap: usize,
    generator: Generator,
    cached: Mutex<Option<(usize, Fixed)>>,
}

impl ConstantCache {
    /// Creates an empty cache keeping at most `cap` decimal places.
    pub fn new<F>(name: &'static str, cap: usize, generator: F) -> ConstantCache
    where
        F: Fn(usize) -> Result<Fixed> + Send + Sync + 'static,
    {
        ConstantCache {
            name,
            cap,
            generator: Box::new(generator),
            cached: Mutex::new(None),
        }
    }

    /// Returns the constant truncated at `digits` places.
    pub fn get(&self, digits: usize) -> Result<Fixed> {
        let mut cached = self.cached.lock();
        if let Some((have, ref value)) = *cached {
            if digits <= have {
                return Ok(value.trunc(digits));
            }
        }
        let value = (self.generator)(digits)?;
        let keep = digits.min(self.cap);
        if cached.as_ref().map_or(true, |&(have, _)| keep > have) {
            debug!(constant = self.name, digits = keep, "extending constant cache");
            *cached = Some((keep, value.trunc(keep)));
        }
        Ok(value)
    }

    /// Returns the number of places currently cached.
    pub fn cached_digits(&self) -> Option<usize> {
        self.cached.lock().as_ref().map(|&(have, _)| have)
    }
}

impl Debug for ConstantCache {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ConstantCache")
            .field("name", &self.name)
            .field("cap", &self.cap)
            .field("cached_digits", &self.cached_digits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantCache;
    use crate::fixed::Fixed;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn check_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let cache = ConstantCache::new("two thirds", 6, move |digits| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Fixed::from(2).div(&Fixed::from(3))?.trunc(digits))
        });
        assert_eq!(cache.cached_digits(), None);
        assert_eq!(cache.get(5).unwrap().to_string(), "0.66666");
        assert_eq!(cache.get(3).unwrap().to_string(), "0.666");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get(8).unwrap().to_string(), "0.66666666");
        assert_eq!(cache.cached_digits(), Some(6));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get(6).unwrap().to_string(), "0.666666");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get(7).unwrap().to_string(), "0.6666666");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.cached_digits(), Some(6));
        let text = format!("{:?}", cache);
        assert!(text.contains("two thirds"));
    }

    #[test]
    fn check_shared_between_threads() {
        let cache = Arc::new(ConstantCache::new("third", 100, |digits| {
            Ok(Fixed::from(1).div(&Fixed::from(3))?.trunc(digits))
        }));
        let handles: Vec<_> = (1..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get(i * 10).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap();
            assert_eq!(value.scale(), (i + 1) * 10);
        }
        assert_eq!(cache.cached_digits(), Some(70));
    }
}
