//! Defines the bond reference data record.

use crate::model::identity::{ProductId, ProductType};
use crate::traits::product::Product;
use crate::traits::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of identifier a bond's product id carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondIdType {
    Cusip,
    Isin,
}

/// Represents a fixed coupon bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Unique identifier for the bond (a CUSIP or an ISIN, see `id_type`).
    product_id: ProductId,

    id_type: BondIdType,

    /// Issuer ticker (e.g. "T" for US Treasuries).
    ticker: String,

    /// Annual coupon, in percent.
    coupon: f64,

    maturity_date: NaiveDate,
}

impl Bond {
    /// Creates a new Bond instance.
    ///
    /// # Arguments
    ///
    /// * `product_id` - The bond identifier (e.g. "912828M56").
    /// * `id_type` - Whether `product_id` is a CUSIP or an ISIN.
    /// * `ticker` - The issuer ticker (e.g. "T").
    /// * `coupon` - The annual coupon in percent (e.g. 2.25).
    /// * `maturity_date` - The date the principal is repaid.
    pub fn new(
        product_id: impl Into<ProductId>,
        id_type: BondIdType,
        ticker: impl Into<String>,
        coupon: f64,
        maturity_date: NaiveDate,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            id_type,
            ticker: ticker.into(),
            coupon,
            maturity_date,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn id_type(&self) -> BondIdType {
        self.id_type
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity_date
    }
}

/// Bond attributes usable in equality queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondAttribute {
    Ticker(String),
    IdType(BondIdType),
}

/// Numeric bond fields usable in threshold queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondField {
    Coupon,
}

impl Record for Bond {
    type Key = ProductId;
    type Attribute = BondAttribute;
    type Field = BondField;

    fn key(&self) -> &ProductId {
        &self.product_id
    }

    fn matches(&self, attribute: &BondAttribute) -> bool {
        match attribute {
            BondAttribute::Ticker(ticker) => self.ticker == *ticker,
            BondAttribute::IdType(id_type) => self.id_type == *id_type,
        }
    }

    fn measure(&self, field: BondField) -> f64 {
        match field {
            BondField::Coupon => self.coupon,
        }
    }
}

impl Product for Bond {
    const PRODUCT_TYPE: ProductType = ProductType::Bond;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treasury() -> Bond {
        Bond::new(
            "912828M56",
            BondIdType::Cusip,
            "T",
            2.25,
            NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
        )
    }

    #[test]
    fn test_bond_attributes() {
        let bond = treasury();
        assert!(bond.matches(&BondAttribute::Ticker("T".to_string())));
        assert!(!bond.matches(&BondAttribute::Ticker("TT".to_string())));
        assert!(bond.matches(&BondAttribute::IdType(BondIdType::Cusip)));
        assert!(!bond.matches(&BondAttribute::IdType(BondIdType::Isin)));
        assert_eq!(bond.measure(BondField::Coupon), 2.25);
        assert_eq!(bond.product_type(), ProductType::Bond);
    }

    #[test]
    fn test_bond_serialization() {
        let json = serde_json::to_string(&treasury()).unwrap();
        assert!(json.contains("\"product_id\":\"912828M56\""));
        assert!(json.contains("\"id_type\":\"Cusip\""));
        assert!(json.contains("\"maturity_date\":\"2025-11-16\""));

        let back: Bond = serde_json::from_str(&json).unwrap();
        assert_eq!(back, treasury());
    }
}
