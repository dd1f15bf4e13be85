//! # List Parameters
//!
//! Query-string parameters of the list operation and their translation into
//! an `ItemFilter`.

use chrono::NaiveDate;
use serde::Deserialize;

use super::errors::{QueryError, QueryResult};
use super::filter::ItemFilter;
use crate::schema::parse_iso_date;

/// Optional filters accepted by `GET /item/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub description: Option<String>,
    pub price_ge: Option<f64>,
    pub price_le: Option<f64>,
    pub listed_starting: Option<String>,
    pub listed_ending: Option<String>,
}

impl ListParams {
    /// Build the filter. Absent parameters contribute no predicate.
    ///
    /// The date range is active as soon as either bound is given; a missing
    /// or empty bound is open-ended.
    pub fn to_filter(&self) -> QueryResult<ItemFilter> {
        let mut filter = ItemFilter::new();

        if let Some(name) = &self.name {
            filter = filter.name_contains(name);
        }
        if let Some(manufacturer) = &self.manufacturer {
            filter = filter.manufacturer_contains(manufacturer);
        }
        if self.listed_starting.is_some() || self.listed_ending.is_some() {
            let start = parse_bound("listed_starting", self.listed_starting.as_deref())?
                .unwrap_or(NaiveDate::MIN);
            let end = parse_bound("listed_ending", self.listed_ending.as_deref())?
                .unwrap_or(NaiveDate::MAX);
            filter = filter.listed_between(start, end);
        }
        if let Some(description) = &self.description {
            filter = filter.description_contains(description);
        }
        if let Some(bound) = self.price_ge {
            check_finite("price_ge", bound)?;
            filter = filter.price_at_least(bound);
        }
        if let Some(bound) = self.price_le {
            check_finite("price_le", bound)?;
            filter = filter.price_at_most(bound);
        }

        Ok(filter)
    }
}

fn parse_bound(bound: &'static str, value: Option<&str>) -> QueryResult<Option<NaiveDate>> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => parse_iso_date(raw)
            .map(Some)
            .ok_or_else(|| QueryError::InvalidDate {
                bound,
                value: raw.to_string(),
            }),
    }
}

fn check_finite(bound: &'static str, value: f64) -> QueryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QueryError::InvalidPrice { bound })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::{Predicate, TextField};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_params_no_predicates() {
        let filter = ListParams::default().to_filter().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_text_params_lowercased() {
        let params = ListParams {
            name: Some("WidG".to_string()),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::Contains {
                field: TextField::Name,
                needle: "widg".to_string()
            }]
        );
    }

    #[test]
    fn test_price_params() {
        let params = ListParams {
            price_ge: Some(1.5),
            price_le: Some(3.0),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::PriceAtLeast(1.5), Predicate::PriceAtMost(3.0)]
        );
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let params = ListParams {
            price_le: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(
            params.to_filter(),
            Err(QueryError::InvalidPrice { bound: "price_le" })
        );
    }

    #[test]
    fn test_single_date_bound_opens_range() {
        let params = ListParams {
            listed_starting: Some("2021-01-01".to_string()),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::ListedBetween {
                start: date(2021, 1, 1),
                end: NaiveDate::MAX
            }]
        );

        let params = ListParams {
            listed_ending: Some("2021-12-31".to_string()),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::ListedBetween {
                start: NaiveDate::MIN,
                end: date(2021, 12, 31)
            }]
        );
    }

    #[test]
    fn test_empty_date_bound_is_open() {
        let params = ListParams {
            listed_starting: Some(String::new()),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::ListedBetween {
                start: NaiveDate::MIN,
                end: NaiveDate::MAX
            }]
        );
    }

    #[test]
    fn test_invalid_date_names_the_bound() {
        let params = ListParams {
            listed_starting: Some("2021-01-01".to_string()),
            listed_ending: Some("31/12/2021".to_string()),
            ..Default::default()
        };
        let err = params.to_filter().unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidDate {
                bound: "listed_ending",
                value: "31/12/2021".to_string()
            }
        );
        assert!(err.to_string().starts_with("listed_ending invalid"));

        let params = ListParams {
            listed_starting: Some("soon".to_string()),
            ..Default::default()
        };
        assert!(params
            .to_filter()
            .unwrap_err()
            .to_string()
            .starts_with("listed_starting invalid"));

        for raw in ["2021-1-5", " 2021-01-05", "+2021-01-05"] {
            let params = ListParams {
                listed_starting: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(
                params.to_filter(),
                Err(QueryError::InvalidDate {
                    bound: "listed_starting",
                    value: raw.to_string()
                })
            );
        }
    }
}
