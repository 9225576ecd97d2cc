//! Thread-safe handle over a [`Catalog`].
//!
//! Writers are serialized with respect to each other and to readers; any
//! number of lookups and scans may run in parallel between writes. Results
//! are returned as owned clones so no lock outlives the call.

use log::debug;
use refdata::{Catalog, Record, Threshold};
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, shareable catalog guarded by a readers-writer lock.
#[derive(Debug)]
pub struct SharedCatalog<K, V> {
    inner: Arc<RwLock<Catalog<K, V>>>,
}

impl<K, V> Clone for SharedCatalog<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedCatalog<K, V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Catalog::default())),
        }
    }
}

impl<K, V> From<Catalog<K, V>> for SharedCatalog<K, V> {
    fn from(catalog: Catalog<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

impl<K, V> SharedCatalog<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Record<Key = K>,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any record already stored under the same id.
    pub fn add(&self, record: V) {
        let mut catalog = self.write();
        if catalog.contains(record.key()) {
            debug!("Replacing record {}", record.key());
        }
        catalog.add(record);
    }

    /// Retrieves a copy of the record stored under `id`.
    pub fn get_data<Q>(&self, id: &Q) -> refdata::Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.read().get_data(id).cloned()
    }

    pub fn get_by_equality(&self, attribute: &V::Attribute) -> Vec<V> {
        self.read()
            .get_by_equality(attribute)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_by_threshold(&self, field: V::Field, value: f64, direction: Threshold) -> Vec<V> {
        self.read()
            .get_by_threshold(field, value, direction)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a point-in-time copy of the whole catalog.
    pub fn snapshot(&self) -> Catalog<K, V> {
        self.read().clone()
    }

    // `add` is a single map insert, so a panicking holder cannot leave the
    // catalog half-written and the poison flag can be ignored.
    fn read(&self) -> RwLockReadGuard<'_, Catalog<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
