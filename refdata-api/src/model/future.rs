//! Defines the futures reference data record.
//!
//! A future is identified by its product id and maturity; what it delivers is
//! described by its [`FutureKind`].

use crate::model::bond::Bond;
use crate::model::identity::{ProductId, ProductType};
use crate::traits::product::Product;
use crate::traits::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a futures contract delivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FutureKind {
    /// A physical commodity (e.g. "Coal").
    Commodity { name: String },
    /// A bond future, carrying the deliverable bond's reference data.
    Bond { underlying: Bond },
    /// A 3M eurodollar deposit future.
    EuroDollar,
}

impl FutureKind {
    pub fn category(&self) -> FutureCategory {
        match self {
            FutureKind::Commodity { .. } => FutureCategory::Commodity,
            FutureKind::Bond { .. } => FutureCategory::Bond,
            FutureKind::EuroDollar => FutureCategory::EuroDollar,
        }
    }
}

/// The [`FutureKind`] tag without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FutureCategory {
    Commodity,
    Bond,
    EuroDollar,
}

/// Represents a futures contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Future {
    product_id: ProductId,
    kind: FutureKind,
    maturity_date: NaiveDate,
}

impl Future {
    pub fn new(product_id: impl Into<ProductId>, kind: FutureKind, maturity_date: NaiveDate) -> Self {
        Self {
            product_id: product_id.into(),
            kind,
            maturity_date,
        }
    }

    /// Creates a commodity future (e.g. `Future::commodity("C2C5", "Coal", date)`).
    pub fn commodity(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        maturity_date: NaiveDate,
    ) -> Self {
        Self::new(product_id, FutureKind::Commodity { name: name.into() }, maturity_date)
    }

    /// Creates a future delivering `underlying`.
    pub fn bond(product_id: impl Into<ProductId>, underlying: Bond, maturity_date: NaiveDate) -> Self {
        Self::new(product_id, FutureKind::Bond { underlying }, maturity_date)
    }

    pub fn euro_dollar(product_id: impl Into<ProductId>, maturity_date: NaiveDate) -> Self {
        Self::new(product_id, FutureKind::EuroDollar, maturity_date)
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn kind(&self) -> &FutureKind {
        &self.kind
    }

    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity_date
    }

    /// Returns the deliverable bond of a bond future.
    pub fn underlying(&self) -> Option<&Bond> {
        match &self.kind {
            FutureKind::Bond { underlying } => Some(underlying),
            _ => None,
        }
    }
}

/// Future attributes usable in equality queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FutureAttribute {
    Category(FutureCategory),
    /// Matches bond futures whose deliverable bond has this id.
    Underlying(ProductId),
}

/// Futures carry no numeric fields, so threshold queries cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FutureField {}

impl Record for Future {
    type Key = ProductId;
    type Attribute = FutureAttribute;
    type Field = FutureField;

    fn key(&self) -> &ProductId {
        &self.product_id
    }

    fn matches(&self, attribute: &FutureAttribute) -> bool {
        match attribute {
            FutureAttribute::Category(category) => self.kind.category() == *category,
            FutureAttribute::Underlying(id) => self
                .underlying()
                .is_some_and(|bond| bond.product_id() == id),
        }
    }

    fn measure(&self, field: FutureField) -> f64 {
        match field {}
    }
}

impl Product for Future {
    const PRODUCT_TYPE: ProductType = ProductType::Future;
}
