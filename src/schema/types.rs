//! Item shapes exchanged over the API boundary
//!
//! Three views of the same record:
//! - `ItemPayload`: what a client sends, every field optional so the
//!   validator (not the decoder) reports what is missing
//! - `ItemData`: a payload that passed validation, ready for storage
//! - `Item`: a stored record, always carrying every field

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Maximum length of `name`, in characters
pub const MAX_NAME_LENGTH: usize = 25;

/// Parse a calendar date in the exact `YYYY-MM-DD` form.
///
/// chrono's `FromStr` also takes unpadded fields, surrounding whitespace and
/// signed years; none of those are ISO-8601 calendar dates.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_iso_date(&raw).ok_or_else(|| {
                de::Error::custom(format!(
                    "listed_since: '{}' is not an ISO-8601 date (YYYY-MM-DD)",
                    raw
                ))
            })
        })
        .transpose()
}

/// A stored item.
///
/// `description` and `tax` serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    pub listed_since: NaiveDate,
    pub manufacturer: String,
}

/// Unvalidated item as decoded from a request body.
///
/// `id` is accepted so clients can round-trip a response body, but it is
/// never authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_iso_date")]
    pub listed_since: Option<NaiveDate>,
    #[serde(default)]
    pub manufacturer: Option<String>,
}

/// Validated, storage-ready item fields.
///
/// `listed_since` stays optional: storage decides the default on create and
/// keeps the stored value on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    pub listed_since: Option<NaiveDate>,
    pub manufacturer: String,
}

impl ItemData {
    pub fn new(name: impl Into<String>, price: f64, manufacturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
            listed_since: None,
            manufacturer: manufacturer.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    pub fn with_listed_since(mut self, date: NaiveDate) -> Self {
        self.listed_since = Some(date);
        self
    }
}
