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
use serde::de::{
    Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess, Visitor,
};
use serde::ser::{SerializeStruct, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub struct Data {
    pub radix: i32,
    pub value: String,
}

pub fn serialize<S>(
    name: &'static str,
    data: &Data,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("radix", &data.radix)?;
    state.serialize_field("value", &data.value)?;
    state.end()
}

const FIELDS: &[&str] = &["radix", "value"];

enum Field {
    Radix,
    Value,
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("`radix` or `value`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E>
    where
        E: DeError,
    {
        match value {
            "radix" => Ok(Field::Radix),
            "value" => Ok(Field::Value),
            _ => Err(DeError::unknown_field(value, FIELDS)),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct NumberVisitor(&'static str);

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Data;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.0)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Data, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let radix = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(0, &self))?;
        let value = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(1, &self))?;
        Ok(Data { radix, value })
    }

    fn visit_map<V>(self, mut map: V) -> Result<Data, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut radix = None;
        let mut value = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Radix => {
                    if radix.is_some() {
                        return Err(DeError::duplicate_field("radix"));
                    }
                    radix = Some(map.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(DeError::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
            }
        }
        let radix = radix.ok_or_else(|| DeError::missing_field("radix"))?;
        let value = value.ok_or_else(|| DeError::missing_field("value"))?;
        Ok(Data { radix, value })
    }
}

/// Reads a `{radix, value}` struct and checks the radix.
pub fn deserialize<'de, D>(
    name: &'static str,
    deserializer: D,
) -> Result<(u32, String), D::Error>
where
    D: Deserializer<'de>,
{
    let Data { radix, value } =
        deserializer.deserialize_struct(name, FIELDS, NumberVisitor(name))?;
    check_range(
        "radix",
        radix,
        codec::MIN_RADIX as i32,
        codec::MAX_RADIX as i32,
    )?;
    Ok((radix as u32, value))
}

pub fn check_range<T, D>(
    name: &'static str,
    val: T,
    min: T,
    max: T,
) -> Result<(), D>
where
    T: Copy + Display + Ord,
    D: DeError,
{
    if val < min {
        Err(DeError::custom(format_args!(
            "{} {} less than minimum {}",
            name, val, min,
        )))
    } else if val > max {
        Err(DeError::custom(format_args!(
            "{} {} greater than maximum {}",
            name, val, max,
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use serde::{Deserialize, Serialize};

    pub fn json_assert_value<T, F>(t: &T, val: &serde_json::Value, test: F)
    where
        T: Serialize + for<'de> Deserialize<'de>,
        F: Fn(&T, &T),
    {
        let enc = serde_json::to_string(t).unwrap();
        let dec: T = serde_json::from_str(&enc).unwrap();
        test(t, &dec);
        let dec_v: serde_json::Value = serde_json::from_str(&enc).unwrap();
        assert_eq!(val, &dec_v);
    }

    pub fn json_assert_de_value<T, F>(t: &T, val: serde_json::Value, test: F)
    where
        T: for<'de> Deserialize<'de>,
        F: Fn(&T, &T),
    {
        let dec: T = serde_json::from_value(val).unwrap();
        test(t, &dec);
    }
}
