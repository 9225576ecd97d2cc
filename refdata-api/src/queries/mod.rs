//! Per-product query helpers.
//!
//! Each product family gets a catalog alias and a handful of free functions
//! naming the queries callers actually run. They are thin wrappers over
//! [`Catalog::get_by_equality`] and [`Catalog::get_by_threshold`].

pub mod bond;
pub mod future;
pub mod swap;

use crate::catalog::Catalog;
use crate::model::bond::Bond;
use crate::model::future::Future;
use crate::model::identity::ProductId;
use crate::model::swap::IrSwap;

pub type BondCatalog = Catalog<ProductId, Bond>;
pub type SwapCatalog = Catalog<ProductId, IrSwap>;
pub type FutureCatalog = Catalog<ProductId, Future>;

pub use bond::*;
pub use future::*;
pub use swap::*;
