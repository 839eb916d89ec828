//! Money amounts as the backend reports them.
//!
//! The backend is loose about amount types: the same field may arrive as a
//! JSON number, a numeric string, an empty string, `null`, or garbage from an
//! old client. [`Amount`] accepts all of them. Anything non-numeric reads as
//! zero, so a malformed record never aborts an aggregation.
//!
//! Numbers beyond the decimal range clamp to [`Amount::MAX`] or [`Amount::MIN`],
//! and arithmetic saturates at the same bounds instead of overflowing.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// A decimal money amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(Decimal::MAX);
    pub const MIN: Self = Self(Decimal::MIN);

    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Coerce free text to an amount, with zero for anything non-numeric.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        parse_numeric(raw).unwrap_or_default()
    }

    /// Coerce a float to an amount. NaN and infinities become zero; finite
    /// values outside the decimal range clamp to the nearest bound.
    #[must_use]
    pub fn from_f64_lossy(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Decimal::from_f64(value).map_or_else(
            || if value.is_sign_negative() { Self::MIN } else { Self::MAX },
            Self,
        )
    }
}

fn parse_numeric(raw: &str) -> Option<Amount> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Amount::ZERO);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .map(Amount)
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Amount::from_f64_lossy)
        })
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Amount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Strict parsing for user input (CLI arguments). Unlike deserialization,
/// garbage is an error here rather than a silent zero.
impl FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(CoreError::Validation("amount must not be empty".into()));
        }
        parse_numeric(s).ok_or_else(|| CoreError::Validation(format!("invalid amount '{s}'")))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientAmountVisitor)
    }
}

struct LenientAmountVisitor;

impl<'de> Visitor<'de> for LenientAmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount (number or numeric string)")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Amount::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Amount::from_f64_lossy(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Amount::coerce(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(Amount::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Amount::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Amount::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Amount::ZERO)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Amount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn decode(value: serde_json::Value) -> Amount {
        serde_json::from_value(value).expect("amount decoding never fails")
    }

    #[test]
    fn numbers_decode_exactly() {
        assert_eq!(decode(json!(100)), Amount::from(100));
        assert_eq!(decode(json!(-5)), Amount::from(-5));
        assert_eq!(decode(json!(12.5)).to_string(), "12.5");
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(decode(json!("250")), Amount::from(250));
        assert_eq!(decode(json!("  42 ")), Amount::from(42));
        assert_eq!(decode(json!("1e3")), Amount::from(1000));
    }

    #[test]
    fn non_numeric_values_coerce_to_zero() {
        for value in [
            json!("abc"),
            json!(""),
            json!(null),
            json!(true),
            json!({"value": 3}),
            json!([1, 2]),
        ] {
            assert_eq!(decode(value.clone()), Amount::ZERO, "value: {value}");
        }
    }

    #[test]
    fn integral_amounts_serialize_as_integers() {
        let out = serde_json::to_string(&Amount::from(100)).expect("serialize");
        assert_eq!(out, "100");
        let out = serde_json::to_string(&Amount::coerce("10.25")).expect("serialize");
        assert_eq!(out, "10.25");
    }

    #[test]
    fn strict_parse_rejects_garbage() {
        assert!("abc".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert_eq!("75.50".parse::<Amount>().expect("parse").to_string(), "75.5");
    }

    #[test]
    fn sums_and_differences() {
        let total: Amount = [Amount::from(10), Amount::from(5)].iter().sum();
        assert_eq!(total, Amount::from(15));
        assert_eq!(Amount::from(3) - Amount::from(8), Amount::from(-5));
        assert!((Amount::from(3) - Amount::from(8)).is_negative());
        assert!(!Amount::ZERO.is_negative());
    }

    #[test]
    fn overflowing_sum_saturates() {
        let big = decode(json!(5e28));
        assert!(big > Amount::ZERO);
        let total: Amount = [big, big].iter().sum();
        assert_eq!(total, Amount::MAX);

        let mut running = big;
        running += big;
        assert_eq!(running, Amount::MAX);
        assert_eq!(Amount::MIN - big, Amount::MIN);
    }

    #[test]
    fn out_of_range_numbers_clamp_instead_of_zeroing() {
        assert_eq!(decode(json!(1e30)), Amount::MAX);
        assert_eq!(decode(json!(-1e30)), Amount::MIN);
        assert_eq!(Amount::coerce("1e30"), Amount::MAX);
        assert_eq!("1e30".parse::<Amount>().expect("parse"), Amount::MAX);
        assert_eq!(Amount::coerce("NaN"), Amount::ZERO);
        assert_eq!(Amount::coerce("Infinity"), Amount::ZERO);
    }
}
