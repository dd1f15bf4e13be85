//! # Item Filter
//!
//! A filter is a conjunction of predicates. Each predicate constrains one
//! field; a filter with no predicates matches every item.

use chrono::NaiveDate;

use crate::schema::Item;

/// Free-text fields that support substring matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Manufacturer,
    Description,
}

impl TextField {
    fn value<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            TextField::Name => Some(item.name.as_str()),
            TextField::Manufacturer => Some(item.manufacturer.as_str()),
            TextField::Description => item.description.as_deref(),
        }
    }
}

/// A single constraint over an item
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring. `needle` is stored lowercased.
    Contains { field: TextField, needle: String },

    /// price >= bound
    PriceAtLeast(f64),

    /// price <= bound
    PriceAtMost(f64),

    /// start <= listed_since <= end
    ListedBetween { start: NaiveDate, end: NaiveDate },
}

impl Predicate {
    pub fn contains(field: TextField, value: &str) -> Self {
        Predicate::Contains {
            field,
            needle: value.to_lowercase(),
        }
    }

    /// Check if an item satisfies this predicate
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Predicate::Contains { field, needle } => match field.value(item) {
                Some(haystack) => haystack.to_lowercase().contains(needle.as_str()),
                // A null column never matches a text filter
                None => false,
            },
            Predicate::PriceAtLeast(bound) => item.price >= *bound,
            Predicate::PriceAtMost(bound) => item.price <= *bound,
            Predicate::ListedBetween { start, end } => {
                *start <= item.listed_since && item.listed_since <= *end
            }
        }
    }
}

/// Predicates combined with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    predicates: Vec<Predicate>,
}

impl ItemFilter {
    /// Filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn name_contains(self, value: &str) -> Self {
        self.and(Predicate::contains(TextField::Name, value))
    }

    pub fn manufacturer_contains(self, value: &str) -> Self {
        self.and(Predicate::contains(TextField::Manufacturer, value))
    }

    pub fn description_contains(self, value: &str) -> Self {
        self.and(Predicate::contains(TextField::Description, value))
    }

    pub fn price_at_least(self, bound: f64) -> Self {
        self.and(Predicate::PriceAtLeast(bound))
    }

    pub fn price_at_most(self, bound: f64) -> Self {
        self.and(Predicate::PriceAtMost(bound))
    }

    pub fn listed_between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.and(Predicate::ListedBetween { start, end })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check if an item satisfies every predicate
    pub fn matches(&self, item: &Item) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }

    /// Keep matching items, ordered by id ascending
    pub fn apply(&self, items: impl IntoIterator<Item = Item>) -> Vec<Item> {
        let mut matched: Vec<Item> = items.into_iter().filter(|i| self.matches(i)).collect();
        matched.sort_by_key(|i| i.id);
        matched
    }
}
