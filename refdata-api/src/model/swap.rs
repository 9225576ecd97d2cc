//! Defines the interest rate swap reference data record.

use crate::model::conventions::{
    Currency, DayCountConvention, FloatingIndex, FloatingIndexTenor, PaymentFrequency, SwapLegType,
    SwapType,
};
use crate::model::identity::{ProductId, ProductType};
use crate::traits::product::Product;
use crate::traits::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a fixed-for-floating interest rate swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrSwap {
    product_id: ProductId,
    fixed_leg_day_count: DayCountConvention,
    floating_leg_day_count: DayCountConvention,
    fixed_leg_payment_frequency: PaymentFrequency,
    floating_index: FloatingIndex,
    floating_index_tenor: FloatingIndexTenor,
    effective_date: NaiveDate,
    termination_date: NaiveDate,
    currency: Currency,
    /// Whole years between effective and termination date (e.g. 10 for a 10Y swap).
    term_years: u32,
    swap_type: SwapType,
    swap_leg_type: SwapLegType,
}

impl IrSwap {
    /// Creates a new IrSwap instance.
    ///
    /// The term in years is quoted separately from the dates, as it is on the
    /// trading screens (a 10Y swap is a 10Y swap whatever its roll dates).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: impl Into<ProductId>,
        fixed_leg_day_count: DayCountConvention,
        floating_leg_day_count: DayCountConvention,
        fixed_leg_payment_frequency: PaymentFrequency,
        floating_index: FloatingIndex,
        floating_index_tenor: FloatingIndexTenor,
        effective_date: NaiveDate,
        termination_date: NaiveDate,
        currency: Currency,
        term_years: u32,
        swap_type: SwapType,
        swap_leg_type: SwapLegType,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            fixed_leg_day_count,
            floating_leg_day_count,
            fixed_leg_payment_frequency,
            floating_index,
            floating_index_tenor,
            effective_date,
            termination_date,
            currency,
            term_years,
            swap_type,
            swap_leg_type,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn fixed_leg_day_count(&self) -> DayCountConvention {
        self.fixed_leg_day_count
    }

    pub fn floating_leg_day_count(&self) -> DayCountConvention {
        self.floating_leg_day_count
    }

    pub fn fixed_leg_payment_frequency(&self) -> PaymentFrequency {
        self.fixed_leg_payment_frequency
    }

    pub fn floating_index(&self) -> FloatingIndex {
        self.floating_index
    }

    pub fn floating_index_tenor(&self) -> FloatingIndexTenor {
        self.floating_index_tenor
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn termination_date(&self) -> NaiveDate {
        self.termination_date
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn swap_type(&self) -> SwapType {
        self.swap_type
    }

    pub fn swap_leg_type(&self) -> SwapLegType {
        self.swap_leg_type
    }
}

/// Swap attributes usable in equality queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAttribute {
    FixedLegDayCount(DayCountConvention),
    FloatingLegDayCount(DayCountConvention),
    FixedLegPaymentFrequency(PaymentFrequency),
    FloatingIndex(FloatingIndex),
    FloatingIndexTenor(FloatingIndexTenor),
    Currency(Currency),
    SwapType(SwapType),
    SwapLegType(SwapLegType),
}

/// Numeric swap fields usable in threshold queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapField {
    TermYears,
}

impl Record for IrSwap {
    type Key = ProductId;
    type Attribute = SwapAttribute;
    type Field = SwapField;

    fn key(&self) -> &ProductId {
        &self.product_id
    }

    fn matches(&self, attribute: &SwapAttribute) -> bool {
        match *attribute {
            SwapAttribute::FixedLegDayCount(v) => self.fixed_leg_day_count == v,
            SwapAttribute::FloatingLegDayCount(v) => self.floating_leg_day_count == v,
            SwapAttribute::FixedLegPaymentFrequency(v) => self.fixed_leg_payment_frequency == v,
            SwapAttribute::FloatingIndex(v) => self.floating_index == v,
            SwapAttribute::FloatingIndexTenor(v) => self.floating_index_tenor == v,
            SwapAttribute::Currency(v) => self.currency == v,
            SwapAttribute::SwapType(v) => self.swap_type == v,
            SwapAttribute::SwapLegType(v) => self.swap_leg_type == v,
        }
    }

    fn measure(&self, field: SwapField) -> f64 {
        match field {
            SwapField::TermYears => f64::from(self.term_years),
        }
    }
}

impl Product for IrSwap {
    const PRODUCT_TYPE: ProductType = ProductType::IrSwap;
}
