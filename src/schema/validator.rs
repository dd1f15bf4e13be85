//! Item validator
//!
//! Turns an `ItemPayload` into `ItemData` or rejects it. Checks run in field
//! order and the first failure is reported. Validation never touches storage
//! and never mutates its input.

use super::errors::{SchemaError, SchemaResult};
use super::types::{ItemData, ItemPayload, MAX_NAME_LENGTH};

pub struct ItemValidator;

impl ItemValidator {
    /// Validates a candidate record.
    ///
    /// # Errors
    ///
    /// - `name` absent or longer than `MAX_NAME_LENGTH` characters
    /// - `price` absent, negative or not finite
    /// - `tax` present and negative or not finite
    /// - `manufacturer` absent
    pub fn validate(payload: &ItemPayload) -> SchemaResult<ItemData> {
        let name = payload
            .name
            .as_ref()
            .ok_or(SchemaError::MissingField("name"))?;
        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(SchemaError::TooLong {
                field: "name",
                max: MAX_NAME_LENGTH,
                actual: length,
            });
        }

        let price = payload.price.ok_or(SchemaError::MissingField("price"))?;
        check_non_negative("price", price)?;

        if let Some(tax) = payload.tax {
            check_non_negative("tax", tax)?;
        }

        let manufacturer = payload
            .manufacturer
            .as_ref()
            .ok_or(SchemaError::MissingField("manufacturer"))?;

        Ok(ItemData {
            name: name.clone(),
            description: payload.description.clone(),
            price,
            tax: payload.tax,
            listed_since: payload.listed_since,
            manufacturer: manufacturer.clone(),
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> SchemaResult<()> {
    if !value.is_finite() {
        return Err(SchemaError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(SchemaError::Negative { field, value });
    }
    Ok(())
}
