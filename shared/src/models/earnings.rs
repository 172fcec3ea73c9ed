//! Earnings and payout models

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::reservation::ParseStatusError;

/// Payout state of a single booking. Closed set, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarningStatus {
    Paid,
    InEscrow,
    Pending,
}

impl EarningStatus {
    /// Canonical wire spelling (`"In escrow"` keeps its space).
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningStatus::Paid => "Paid",
            EarningStatus::InEscrow => "In escrow",
            EarningStatus::Pending => "Pending",
        }
    }

    /// Lower-cased filter token.
    pub fn token(&self) -> &'static str {
        match self {
            EarningStatus::Paid => "paid",
            EarningStatus::InEscrow => "in escrow",
            EarningStatus::Pending => "pending",
        }
    }
}

impl FromStr for EarningStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Ok(EarningStatus::Paid),
            "in escrow" => Ok(EarningStatus::InEscrow),
            "pending" => Ok(EarningStatus::Pending),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl fmt::Display for EarningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EarningStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EarningStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| de::Error::unknown_variant(&raw, &["Paid", "In escrow", "Pending"]))
    }
}

/// One row of the earnings table. `amount` stays a string on the wire
/// (possibly comma-formatted); rendering goes through
/// [`crate::util::format_naira`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsBooking {
    pub id: i64,
    /// Display identifier, e.g. `"#SK-1015"`.
    pub booking_id: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub amount: String,
    pub status: EarningStatus,
    #[serde(default)]
    pub withdrawal_earnings: String,
}

/// Aggregate card on the earnings page (total / escrow / paid out), with
/// a pre-formatted amount string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsCard {
    pub id: i64,
    pub title: String,
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escrow_status_round_trips_with_space() {
        let status: EarningStatus = serde_json::from_str(r#""In escrow""#).unwrap();
        assert_eq!(status, EarningStatus::InEscrow);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""In escrow""#);
    }

    #[test]
    fn escrow_token_matches_mixed_case_filter_input() {
        // The original select emits "in Escrow"; both sides lower-case.
        assert_eq!("in Escrow".to_lowercase(), EarningStatus::InEscrow.token());
    }

    #[test]
    fn withdrawal_note_defaults_to_empty() {
        let json = r##"{"id":1,"booking_id":"#SK-1015","date":"2025-07-24","amount":"15,000.00","status":"Paid"}"##;
        let b: EarningsBooking = serde_json::from_str(json).unwrap();
        assert_eq!(b.withdrawal_earnings, "");
    }
}
