use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Seat value given to infants carried on a parent's lap
pub const LAP_MARKER: &str = "LAP";

/// Identifier of a record owned by another service.
///
/// The record services are inconsistent about whether keys are serialized
/// as numbers or strings, so both forms are accepted and two references are
/// equal when their text forms are equal (`7 == "7"`). The original form is
/// kept so documents written back out look like what was read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    Number(i64),
    Text(String),
}

impl RecordRef {
    /// Canonical text form used for comparison and lookups
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            RecordRef::Number(n) => Cow::Owned(n.to_string()),
            RecordRef::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RecordRef {}

impl Hash for RecordRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for RecordRef {
    fn from(value: &str) -> Self {
        RecordRef::Text(value.to_string())
    }
}

impl From<i64> for RecordRef {
    fn from(value: i64) -> Self {
        RecordRef::Number(value)
    }
}

/// Final seat value of a passenger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Seat {
    /// A physical seat such as "12A"
    Label(String),
    /// Infant on a parent's lap, no seat consumed
    Lap,
}

impl Seat {
    pub fn label(&self) -> Option<&str> {
        match self {
            Seat::Label(label) => Some(label),
            Seat::Lap => None,
        }
    }

    pub fn is_lap(&self) -> bool {
        matches!(self, Seat::Lap)
    }
}

impl From<String> for Seat {
    fn from(value: String) -> Self {
        if value == LAP_MARKER {
            Seat::Lap
        } else {
            Seat::Label(value)
        }
    }
}

impl From<Seat> for String {
    fn from(value: Seat) -> Self {
        match value {
            Seat::Label(label) => label,
            Seat::Lap => LAP_MARKER.to_string(),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Label(label) => f.write_str(label),
            Seat::Lap => f.write_str(LAP_MARKER),
        }
    }
}

/// Empty strings count as "no seat", same as null
pub(crate) fn deserialize_optional_seat<'de, D>(deserializer: D) -> Result<Option<Seat>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(Seat::from))
}
