//! # Reference Data API
//!
//! Pure data types for instrument reference data: the product models, the
//! [`Record`] contract and the keyed [`Catalog`] that stores and queries them.
//! Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod model;
pub mod queries;
pub mod traits;

pub use catalog::{Catalog, Threshold};
pub use error::{CatalogError, Result};
pub use model::bond::{Bond, BondAttribute, BondField, BondIdType};
pub use model::future::{Future, FutureAttribute, FutureCategory, FutureField, FutureKind};
pub use model::identity::{ProductId, ProductType};
pub use model::swap::{IrSwap, SwapAttribute, SwapField};
pub use queries::{BondCatalog, FutureCatalog, SwapCatalog};
pub use traits::product::Product;
pub use traits::record::Record;

pub mod prelude {
    pub use crate::catalog::{Catalog, Threshold};
    pub use crate::error::CatalogError;
    pub use crate::model::conventions::*;
    pub use crate::model::identity::ProductId;
    pub use crate::queries::{BondCatalog, FutureCatalog, SwapCatalog};
    pub use crate::traits::product::Product;
    pub use crate::traits::record::Record;
}
