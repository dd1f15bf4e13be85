//! Query Engine Property Tests
//!
//! Checks the filter rules against a stored catalog, for every combination
//! of a set of probe values:
//! - substring filters include an item iff lowercase(value) occurs in
//!   lowercase(field)
//! - absent filters impose no constraint
//! - price bounds are inclusive; crossed bounds return nothing
//! - results are always in id order

use std::time::Duration;

use itemstore::query::ListParams;
use itemstore::schema::{Item, ItemData};
use itemstore::storage::ItemGateway;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_catalog() -> (TempDir, ItemGateway, Vec<Item>) {
    let tmp = TempDir::new().unwrap();
    let gateway = ItemGateway::open(tmp.path().join("items.db"), Duration::from_secs(1)).unwrap();

    let records = vec![
        ItemData::new("Widget", 9.99, "Acme").with_description("Small blue widget"),
        ItemData::new("Gadget", 15.0, "ACME Industries"),
        ItemData::new("Desk Lamp", 24.5, "Lumos").with_description("Warm WHITE light"),
        ItemData::new("widget mini", 0.0, "acme").with_tax(0.1),
        ItemData::new("Straße Sign", 120.0, "Öffentlich AG").with_description("Über groß"),
    ];

    let stored = records
        .into_iter()
        .map(|r| gateway.create(r).unwrap())
        .collect();
    (tmp, gateway, stored)
}

fn list(gateway: &ItemGateway, params: &ListParams) -> Vec<i64> {
    let filter = params.to_filter().unwrap();
    gateway.list(&filter).unwrap().iter().map(|i| i.id).collect()
}

fn expected(stored: &[Item], keep: impl Fn(&Item) -> bool) -> Vec<i64> {
    stored.iter().filter(|i| keep(i)).map(|i| i.id).collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

const PROBES: &[&str] = &["", "w", "WIDGET", "acme", "Acme Ind", "ß", "ÜBER", "light", "zzz"];

// =============================================================================
// Substring Properties
// =============================================================================

#[test]
fn test_name_filter_property() {
    let (_tmp, gateway, stored) = setup_catalog();

    for probe in PROBES {
        let params = ListParams {
            name: Some(probe.to_string()),
            ..Default::default()
        };
        assert_eq!(
            list(&gateway, &params),
            expected(&stored, |i| contains_ci(&i.name, probe)),
            "name={:?}",
            probe
        );
    }
}

#[test]
fn test_manufacturer_filter_property() {
    let (_tmp, gateway, stored) = setup_catalog();

    for probe in PROBES {
        let params = ListParams {
            manufacturer: Some(probe.to_string()),
            ..Default::default()
        };
        assert_eq!(
            list(&gateway, &params),
            expected(&stored, |i| contains_ci(&i.manufacturer, probe)),
            "manufacturer={:?}",
            probe
        );
    }
}

#[test]
fn test_description_filter_property() {
    let (_tmp, gateway, stored) = setup_catalog();

    for probe in PROBES {
        let params = ListParams {
            description: Some(probe.to_string()),
            ..Default::default()
        };
        assert_eq!(
            list(&gateway, &params),
            expected(&stored, |i| i
                .description
                .as_deref()
                .map_or(false, |d| contains_ci(d, probe))),
            "description={:?}",
            probe
        );
    }
}

#[test]
fn test_pairs_of_filters_are_conjunctions() {
    let (_tmp, gateway, stored) = setup_catalog();

    for name in PROBES {
        for manufacturer in PROBES {
            let params = ListParams {
                name: Some(name.to_string()),
                manufacturer: Some(manufacturer.to_string()),
                ..Default::default()
            };
            assert_eq!(
                list(&gateway, &params),
                expected(&stored, |i| contains_ci(&i.name, name)
                    && contains_ci(&i.manufacturer, manufacturer)),
                "name={:?} manufacturer={:?}",
                name,
                manufacturer
            );
        }
    }
}

// =============================================================================
// Absent Filters & Ordering
// =============================================================================

#[test]
fn test_no_filters_returns_full_set_in_id_order() {
    let (_tmp, gateway, stored) = setup_catalog();
    let ids = list(&gateway, &ListParams::default());

    assert_eq!(ids, expected(&stored, |_| true));
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// Price Bounds
// =============================================================================

#[test]
fn test_price_bounds_property() {
    let (_tmp, gateway, stored) = setup_catalog();
    let bounds = [0.0, 9.99, 10.0, 15.0, 24.5, 1000.0];

    for ge in bounds {
        for le in bounds {
            let params = ListParams {
                price_ge: Some(ge),
                price_le: Some(le),
                ..Default::default()
            };
            let ids = list(&gateway, &params);
            assert_eq!(
                ids,
                expected(&stored, |i| ge <= i.price && i.price <= le),
                "price_ge={} price_le={}",
                ge,
                le
            );
            if ge > le {
                assert!(ids.is_empty());
            }
        }
    }
}
