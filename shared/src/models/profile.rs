//! Restaurant profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant profile entity, one per partner account. Every field is
/// optional on the wire; missing values render as placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub address: String,
    /// Opening hour, `HH:MM`.
    #[serde(default)]
    pub open_at: String,
    /// Closing hour, `HH:MM`.
    #[serde(default)]
    pub close_at: String,
    #[serde(default)]
    pub description: String,
    /// `"yes"` / `"no"` on the wire.
    #[serde(default, with = "yes_no")]
    pub premium_table: bool,
    #[serde(default)]
    pub price_per_table: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub restaurant_photo: Option<String>,
    #[serde(default)]
    pub secondary_photo: Option<String>,
    #[serde(default)]
    pub third_photo: Option<String>,
    // Derived reservation/revenue counters maintained by the backend.
    #[serde(default)]
    pub total_reservation: u64,
    #[serde(default)]
    pub pending_reservation: u64,
    #[serde(default)]
    pub approved_reservation: u64,
    #[serde(default)]
    pub pending_revenue: Option<Revenue>,
}

/// Revenue arrives either as a number or as an opaque display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Revenue {
    Amount(Decimal),
    Text(String),
}

impl Revenue {
    /// Display form: numbers go through NGN formatting, strings pass
    /// through unchanged.
    pub fn display(&self) -> String {
        match self {
            Revenue::Amount(amount) => crate::util::format_naira(&amount.to_string()),
            Revenue::Text(text) => text.clone(),
        }
    }
}

/// serde adapter for the backend's `"yes"` / `"no"` booleans.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.eq_ignore_ascii_case("yes"))
    }
}

/// Binary image attachment for the profile form.
#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart profile-form payload: seven text fields plus up to two
/// photo attachments. The partner id is appended at submission time.
#[derive(Debug, Clone, Default)]
pub struct ProfileSubmission {
    pub restaurant_name: String,
    pub address: String,
    pub open_at: String,
    pub close_at: String,
    pub premium_table: bool,
    pub price_per_table: String,
    pub description: String,
    pub restaurant_photo: Option<PhotoAttachment>,
    pub secondary_photo: Option<PhotoAttachment>,
}

impl ProfileSubmission {
    /// `"yes"` / `"no"` form-field value for the premium flag.
    pub fn premium_table_field(&self) -> &'static str {
        if self.premium_table { "yes" } else { "no" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_flag_decodes_yes_no() {
        let p: RestaurantProfile =
            serde_json::from_str(r#"{"restaurantName":"Big Taste","premiumTable":"Yes"}"#).unwrap();
        assert!(p.premium_table);
        let p: RestaurantProfile = serde_json::from_str(r#"{"premiumTable":"no"}"#).unwrap();
        assert!(!p.premium_table);
    }

    #[test]
    fn revenue_accepts_number_or_string() {
        let p: RestaurantProfile = serde_json::from_str(r#"{"pendingRevenue":25000}"#).unwrap();
        assert_eq!(
            p.pending_revenue,
            Some(Revenue::Amount(Decimal::from(25_000)))
        );
        let p: RestaurantProfile = serde_json::from_str(r#"{"pendingRevenue":"-"}"#).unwrap();
        assert_eq!(p.pending_revenue, Some(Revenue::Text("-".to_string())));
    }

    #[test]
    fn numeric_revenue_displays_as_naira() {
        let revenue = Revenue::Amount(Decimal::from(25_000));
        assert_eq!(revenue.display(), "₦25,000.00");
    }

    #[test]
    fn missing_fields_default() {
        let p: RestaurantProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(p.restaurant_name, "");
        assert_eq!(p.total_reservation, 0);
        assert!(p.pending_revenue.is_none());
    }
}
