use super::FutureCatalog;
use crate::model::future::{Future, FutureAttribute, FutureCategory};
use crate::model::identity::ProductId;

pub fn futures_by_kind(catalog: &FutureCatalog, category: FutureCategory) -> Vec<&Future> {
    catalog.get_by_equality(&FutureAttribute::Category(category))
}

/// Returns the bond futures delivering the bond identified by `bond_id`.
pub fn futures_on_underlying<'a>(catalog: &'a FutureCatalog, bond_id: &str) -> Vec<&'a Future> {
    catalog.get_by_equality(&FutureAttribute::Underlying(ProductId::new(bond_id)))
}
