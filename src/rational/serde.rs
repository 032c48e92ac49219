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

use crate::codec;
use crate::error::{Error, ErrorKind};
use crate::rational::Rational;
use crate::serdeize::{self, Data};
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_fraction();
        serdeize::serialize("Rational", &Data { radix: 10, value }, serializer)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Rational, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (radix, value) = serdeize::deserialize("Rational", deserializer)?;
        from_str_radix(&value, radix).map_err(DeError::custom)
    }
}

fn from_str_radix(value: &str, radix: u32) -> Result<Rational, Error> {
    if radix == 10 {
        return value.parse();
    }
    let mut parts = value.split('/');
    let (n1, d1) = codec::parse_radix(parts.next().unwrap_or(""), radix)?;
    let (n2, d2) = match parts.next() {
        Some(bottom) => codec::parse_radix(bottom, radix)?,
        None => (1.into(), 1.into()),
    };
    if parts.next().is_some() {
        return Err(Error::with_fragment(ErrorKind::TooManySlashes, value));
    }
    Rational::from_ratio(n1 * d2, d1 * n2)
}
