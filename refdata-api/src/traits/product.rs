use crate::model::identity::{ProductId, ProductType};
use crate::traits::record::Record;

/// A tradable product keyed by its [`ProductId`].
pub trait Product: Record<Key = ProductId> {
    const PRODUCT_TYPE: ProductType;

    fn product_type(&self) -> ProductType {
        Self::PRODUCT_TYPE
    }
}
