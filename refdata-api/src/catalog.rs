//! In-memory catalog of reference data records.
//!
//! A catalog owns every record of one variant, keyed by the record's id.
//! Lookups by id are O(1); attribute queries are a linear scan over all
//! stored records.

use crate::error::{CatalogError, Result};
use crate::traits::record::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Direction of a threshold query. Both directions are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Threshold {
    /// Keep records whose field is strictly greater than the value.
    Above,
    /// Keep records whose field is strictly less than the value.
    Below,
}

impl Threshold {
    /// Returns `true` when `measured` lies strictly on this side of `value`.
    pub fn admits(self, measured: f64, value: f64) -> bool {
        match self {
            Threshold::Above => measured > value,
            Threshold::Below => measured < value,
        }
    }
}

/// A keyed store of records of a single variant.
#[derive(Debug, Clone)]
pub struct Catalog<K, V> {
    records: HashMap<K, V>,
}

impl<K, V> Default for Catalog<K, V> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<K, V> Catalog<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Record<Key = K>,
{
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any record already stored under the same id.
    pub fn add(&mut self, record: V) {
        self.records.insert(record.key().clone(), record);
    }

    /// Retrieves the record stored under `id`.
    ///
    /// # Returns
    ///
    /// * `Ok(&V)` if the id is known.
    /// * `Err(CatalogError::NotFound)` otherwise. The catalog is left untouched.
    pub fn get_data<Q>(&self, id: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.records
            .get(id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Returns every record whose attribute equals the value carried by `attribute`.
    pub fn get_by_equality(&self, attribute: &V::Attribute) -> Vec<&V> {
        self.select(|record| record.matches(attribute))
    }

    /// Returns every record whose numeric `field` lies strictly above or below `value`.
    pub fn get_by_threshold(&self, field: V::Field, value: f64, direction: Threshold) -> Vec<&V> {
        self.select(|record| direction.admits(record.measure(field), value))
    }

    /// Returns every record satisfying `predicate`, in no particular order.
    pub fn select<P>(&self, mut predicate: P) -> Vec<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.records
            .values()
            .filter(|record| predicate(record))
            .collect()
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the stored records.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.records.values()
    }
}

impl<K, V> Extend<V> for Catalog<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Record<Key = K>,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, records: I) {
        for record in records {
            self.add(record);
        }
    }
}

impl<K, V> FromIterator<V> for Catalog<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Record<Key = K>,
{
    fn from_iter<I: IntoIterator<Item = V>>(records: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(records);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        id: String,
        sensor: &'static str,
        value: f64,
    }

    impl Reading {
        fn new(id: &str, sensor: &'static str, value: f64) -> Self {
            Self {
                id: id.to_string(),
                sensor,
                value,
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Value;

    struct Sensor(&'static str);

    impl Record for Reading {
        type Key = String;
        type Attribute = Sensor;
        type Field = Value;

        fn key(&self) -> &String {
            &self.id
        }

        fn matches(&self, attribute: &Sensor) -> bool {
            self.sensor == attribute.0
        }

        fn measure(&self, _field: Value) -> f64 {
            self.value
        }
    }

    fn ids(records: Vec<&Reading>) -> Vec<String> {
        let mut ids: Vec<String> = records.into_iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let mut catalog: Catalog<String, Reading> = Catalog::new();
        catalog.add(Reading::new("a", "north", 1.0));
        catalog.add(Reading::new("a", "south", 2.0));

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get_data("a"),
            Ok(&Reading::new("a", "south", 2.0))
        );
    }

    #[test]
    fn test_missing_id_is_not_found_and_leaves_catalog_intact() {
        let mut catalog: Catalog<String, Reading> = Catalog::new();
        assert_eq!(
            catalog.get_data("ghost"),
            Err(CatalogError::NotFound {
                id: "ghost".to_string()
            })
        );
        assert!(catalog.is_empty());
        assert!(!catalog.contains("ghost"));

        catalog.add(Reading::new("b", "north", 1.0));
        assert!(catalog.get_data("b").is_ok());
    }

    #[test]
    fn test_equality_returns_exact_subset() {
        let catalog: Catalog<String, Reading> = vec![
            Reading::new("a", "north", 1.0),
            Reading::new("b", "south", 2.0),
            Reading::new("c", "north", 3.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(ids(catalog.get_by_equality(&Sensor("north"))), vec!["a", "c"]);
        assert_eq!(ids(catalog.get_by_equality(&Sensor("south"))), vec!["b"]);
        assert!(catalog.get_by_equality(&Sensor("east")).is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let catalog: Catalog<String, Reading> = vec![
            Reading::new("low", "x", 2.0),
            Reading::new("mid", "x", 3.0),
            Reading::new("high", "x", 10.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            ids(catalog.get_by_threshold(Value, 3.0, Threshold::Above)),
            vec!["high"]
        );
        assert_eq!(
            ids(catalog.get_by_threshold(Value, 3.0, Threshold::Below)),
            vec!["low"]
        );
        assert!(catalog
            .get_by_threshold(Value, 10.0, Threshold::Above)
            .is_empty());
    }

    #[test]
    fn test_queries_on_empty_catalog() {
        let catalog: Catalog<String, Reading> = Catalog::new();
        assert!(catalog.get_by_equality(&Sensor("north")).is_empty());
        assert!(catalog
            .get_by_threshold(Value, 0.0, Threshold::Below)
            .is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
