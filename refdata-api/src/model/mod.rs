//! Reference data models for the products held in a catalog.
//!
//! # Submodules
//! - [`identity`]: Product identifiers and product types.
//! - [`conventions`]: Market conventions shared by the products (day counts, tenors, ...).
//! - [`bond`], [`swap`], [`future`]: The concrete product records.

pub mod bond;
pub mod conventions;
pub mod future;
pub mod identity;
pub mod swap;
