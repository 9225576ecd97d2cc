use super::BondCatalog;
use crate::model::bond::{Bond, BondAttribute};

/// Returns all bonds issued under `ticker`.
pub fn bonds_by_ticker<'a>(catalog: &'a BondCatalog, ticker: &str) -> Vec<&'a Bond> {
    catalog.get_by_equality(&BondAttribute::Ticker(ticker.to_string()))
}
