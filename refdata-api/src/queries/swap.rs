use super::SwapCatalog;
use crate::catalog::Threshold;
use crate::model::conventions::{
    DayCountConvention, FloatingIndex, PaymentFrequency, SwapLegType, SwapType,
};
use crate::model::swap::{IrSwap, SwapAttribute, SwapField};

pub fn swaps_by_fixed_leg_day_count(
    catalog: &SwapCatalog,
    day_count: DayCountConvention,
) -> Vec<&IrSwap> {
    catalog.get_by_equality(&SwapAttribute::FixedLegDayCount(day_count))
}

pub fn swaps_by_fixed_leg_payment_frequency(
    catalog: &SwapCatalog,
    frequency: PaymentFrequency,
) -> Vec<&IrSwap> {
    catalog.get_by_equality(&SwapAttribute::FixedLegPaymentFrequency(frequency))
}

pub fn swaps_by_floating_index(catalog: &SwapCatalog, index: FloatingIndex) -> Vec<&IrSwap> {
    catalog.get_by_equality(&SwapAttribute::FloatingIndex(index))
}

/// Returns the swaps whose term is strictly longer than `term_years`.
pub fn swaps_with_term_above(catalog: &SwapCatalog, term_years: u32) -> Vec<&IrSwap> {
    catalog.get_by_threshold(SwapField::TermYears, f64::from(term_years), Threshold::Above)
}

/// Returns the swaps whose term is strictly shorter than `term_years`.
pub fn swaps_with_term_below(catalog: &SwapCatalog, term_years: u32) -> Vec<&IrSwap> {
    catalog.get_by_threshold(SwapField::TermYears, f64::from(term_years), Threshold::Below)
}

pub fn swaps_by_swap_type(catalog: &SwapCatalog, swap_type: SwapType) -> Vec<&IrSwap> {
    catalog.get_by_equality(&SwapAttribute::SwapType(swap_type))
}

pub fn swaps_by_swap_leg_type(catalog: &SwapCatalog, leg_type: SwapLegType) -> Vec<&IrSwap> {
    catalog.get_by_equality(&SwapAttribute::SwapLegType(leg_type))
}
