//! Roster entry types as delivered by the data service.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Columns that the players table may hold either as JSON numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(i64),
    Text(String),
}

impl From<NumberOrText> for String {
    fn from(value: NumberOrText) -> Self {
        match value {
            NumberOrText::Integer(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

/// Parses the leading integer of a string.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. Returns `None` when no digits lead the string.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Row identifier of a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates an identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NumberOrText::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

/// Height in `FEET'INCHES` notation, e.g. `6'2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(String);

impl Height {
    /// Wraps a raw height string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the height as written in the roster.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Total height in inches (`feet * 12 + inches`).
    ///
    /// `None` when either part is missing, does not start with digits, or
    /// the total does not fit in an `i64`.
    pub fn inches(&self) -> Option<i64> {
        let mut parts = self.0.split('\'');
        let feet = parse_leading_int(parts.next()?)?;
        let inches = parse_leading_int(parts.next()?)?;
        feet.checked_mul(12)?.checked_add(inches)
    }
}

/// Jersey number, stored as the table delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct JerseyNumber(String);

impl JerseyNumber {
    /// Wraps a raw jersey number.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the number as written in the roster.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the field starts with an integer.
    pub fn value(&self) -> Option<i64> {
        parse_leading_int(&self.0)
    }
}

impl<'de> Deserialize<'de> for JerseyNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NumberOrText::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

/// A candidate player. Never mutated after the roster loads.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Unique row identifier.
    id: PlayerId,
    /// Full display name.
    name: String,
    /// Team name.
    team: String,
    /// Position abbreviation.
    position: String,
    /// Conference label.
    #[serde(rename = "conf")]
    conference: String,
    /// Height in `FEET'INCHES` notation.
    height: Height,
    /// Age in years.
    age: i64,
    /// Jersey number.
    number: JerseyNumber,
}

impl Player {
    /// Creates a player record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
        conference: impl Into<String>,
        height: impl Into<String>,
        age: i64,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            team: team.into(),
            position: position.into(),
            conference: conference.into(),
            height: Height::new(height),
            age,
            number: JerseyNumber::new(number),
        }
    }
}
