use std::fmt::Display;
use std::hash::Hash;

/// A value that can be stored in a [`Catalog`](crate::Catalog).
///
/// Implementors expose the key they are stored under, a set of named
/// attributes that can be compared for equality, and a set of named numeric
/// fields that can be compared against a threshold.
pub trait Record: Clone {
    /// The unique identifier type.
    type Key: Eq + Hash + Clone + Display;

    /// A named attribute together with the value to compare against
    /// (e.g. `Ticker("T")`).
    type Attribute;

    /// Names a numeric field (e.g. `TermYears`).
    type Field: Copy;

    /// Returns the identifier this record is keyed by.
    fn key(&self) -> &Self::Key;

    /// Returns `true` when the attribute named by `attribute` equals its value.
    fn matches(&self, attribute: &Self::Attribute) -> bool;

    /// Returns the value of the numeric field named by `field`.
    fn measure(&self, field: Self::Field) -> f64;
}
