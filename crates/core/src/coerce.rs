//! Lenient integer input.
//!
//! Geometry and styling fields arrive from browser forms, so a client may
//! send `12`, `12.7` or `"12"` for the same value. [`LooseInt`] accepts all
//! of them and truncates toward zero; anything that is not numeric is a
//! deserialization error, which the API layer surfaces as a 400.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// An integer that deserializes from JSON integers, floats, numeric strings
/// or booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseInt(pub i64);

impl LooseInt {
    pub fn get(self) -> i64 {
        self.0
    }
}

struct LooseIntVisitor;

impl<'de> Visitor<'de> for LooseIntVisitor {
    type Value = LooseInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, a number, or a numeric string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<LooseInt, E> {
        Ok(LooseInt(i64::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LooseInt, E> {
        Ok(LooseInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LooseInt, E> {
        i64::try_from(v)
            .map(LooseInt)
            .map_err(|_| E::custom(format!("integer value {v} is out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<LooseInt, E> {
        float_to_int(v)
            .map(LooseInt)
            .ok_or_else(|| E::custom(format!("invalid integer value: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LooseInt, E> {
        parse_int(v)
            .map(LooseInt)
            .ok_or_else(|| E::custom(format!("invalid integer value: {v:?}")))
    }
}

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LooseIntVisitor)
    }
}

fn float_to_int(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    let truncated = v.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Parse a decimal integer string, ignoring surrounding whitespace.
///
/// Fractional strings such as `"3.5"` are rejected.
fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
