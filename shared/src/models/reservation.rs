//! Reservation model

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reservation lifecycle status. Closed set; comparisons are
/// case-insensitive everywhere (wire decoding and filtering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    Pending,
    Approved,
    Cancelled,
}

/// Error for a status string outside the closed set.
#[derive(Debug, Clone, Error)]
#[error("unknown reservation status: {0}")]
pub struct ParseStatusError(pub String);

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ReservationStatus::Cancelled,
    ];

    /// Canonical wire spelling (`"Pending"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Approved => "Approved",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// Lower-cased filter token (`"pending"`, ...).
    pub fn token(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "approved" => Ok(ReservationStatus::Approved),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReservationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| de::Error::unknown_variant(&raw, &["Pending", "Approved", "Cancelled"]))
    }
}

/// Reservation entity, owned by the backend; the client holds a
/// read-mostly cached copy and mutates it only through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_string")]
    pub id: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Free-text clock string, e.g. `"7:00 PM"`.
    pub time: String,
    /// Party size.
    pub size: u32,
    pub name: String,
    pub table: String,
    pub status: ReservationStatus,
}

/// Accepts either a string `_id` or a numeric `id`; some endpoints and
/// the fallback datasets disagree on the identifier shape.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "PENDING".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Pending
        );
        assert_eq!(
            "cancelled".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert!("no-show".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn decodes_string_id() {
        let json = r#"{"_id":"66b1","date":"2025-08-22","time":"7:00 PM","size":4,"name":"Mecury Paul","table":"T1","status":"Pending"}"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "66b1");
        assert_eq!(r.status, ReservationStatus::Pending);
    }

    #[test]
    fn decodes_numeric_id() {
        let json = r#"{"id":2,"date":"2025-08-23","time":"8:00 PM","size":2,"name":"Mecury Paul","table":"T4","status":"approved"}"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "2");
        assert_eq!(r.status, ReservationStatus::Approved);
    }

    #[test]
    fn rejects_status_outside_closed_set() {
        let json = r#"{"_id":"1","date":"2025-08-22","time":"7:00 PM","size":4,"name":"A","table":"T1","status":"Seated"}"#;
        assert!(serde_json::from_str::<Reservation>(json).is_err());
    }

    #[test]
    fn serializes_canonical_status_spelling() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, r#""Cancelled""#);
    }
}
