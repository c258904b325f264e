//! serde impls for the input types.
//!
//! Match data usually comes straight out of a database layer which returns every column as a
//! string. All numeric fields therefore accept both numbers and numeric strings.
use std::fmt::{self, Formatter};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BracketTag, Format, MatchId, TeamId};

impl Serialize for Format {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Format {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FormatVisitor)
    }
}

struct FormatVisitor;

impl<'de> Visitor<'de> for FormatVisitor {
    type Value = Format;

    #[inline]
    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a tournament format")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Format::from_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for MatchId {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor).map(Self)
    }
}

impl<'de> Deserialize<'de> for TeamId {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor).map(Self)
    }
}

/// Deserializes a number or a numeric string into `T`.
pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = deserializer.deserialize_any(NumberVisitor)?;
    T::try_from(value).map_err(|_| de::Error::custom(format!("number out of range: {}", value)))
}

/// Deserializes an optional number or numeric string into `T`. `null` and empty strings
/// become `None`.
pub(crate) fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    match deserializer.deserialize_any(OptionalNumberVisitor)? {
        Some(value) => T::try_from(value)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("number out of range: {}", value))),
        None => Ok(None),
    }
}

/// Deserializes an optional [`BracketTag`]. `null` and empty strings become `None`.
pub(crate) fn optional_bracket<'de, D>(deserializer: D) -> Result<Option<BracketTag>, D::Error>
where
    D: Deserializer<'de>,
{
    const VARIANTS: &[&str] = &["winners", "losers", "final"];

    let value: Option<String> = Option::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("") => Ok(None),
        Some("winners") => Ok(Some(BracketTag::Winners)),
        Some("losers") => Ok(Some(BracketTag::Losers)),
        Some("final") => Ok(Some(BracketTag::Final)),
        Some(other) => Err(de::Error::unknown_variant(other, VARIANTS)),
    }
}

fn parse_number<E>(v: &str) -> Result<u64, E>
where
    E: de::Error,
{
    v.trim()
        .parse()
        .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &"a non-negative integer"))
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = u64;

    #[inline]
    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a numeric string")
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_number(v)
    }
}

struct OptionalNumberVisitor;

impl<'de> Visitor<'de> for OptionalNumberVisitor {
    type Value = Option<u64>;

    #[inline]
    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("an optional non-negative integer or numeric string")
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        NumberVisitor.visit_i64(v).map(Some)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.trim().is_empty() {
            Ok(None)
        } else {
            parse_number(v).map(Some)
        }
    }
}
