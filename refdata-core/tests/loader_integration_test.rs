use chrono::NaiveDate;
use refdata::prelude::*;
use refdata::{
    Bond, BondAttribute, BondIdType, Future, FutureAttribute, FutureCategory, IrSwap, SwapField,
};
use refdata_core::args::CommonArgs;
use refdata_core::config::LoaderConfig;
use refdata_core::fs::PathManager;
use refdata_core::ReferenceData;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn swap(id: &str, term_years: u32, swap_type: SwapType) -> IrSwap {
    IrSwap::new(
        id,
        DayCountConvention::Thirty360,
        DayCountConvention::Act360,
        PaymentFrequency::SemiAnnual,
        FloatingIndex::Libor,
        FloatingIndexTenor::Tenor3M,
        date(2015, 11, 16),
        date(2015 + term_years as i32, 11, 16),
        Currency::Usd,
        term_years,
        swap_type,
        SwapLegType::Outright,
    )
}

fn path_manager(data_dir: &Path, config_dir: &Path) -> PathManager {
    let args = CommonArgs::parse_args(vec![
        "refdata-core".to_string(),
        "--config-dir".to_string(),
        config_dir.display().to_string(),
        "--data-dir".to_string(),
        data_dir.display().to_string(),
    ]);
    PathManager::from_args(&args)
}

#[test]
fn test_load_all_snapshots() {
    let _ = env_logger::builder().is_test(true).try_init();
    let data_dir = tempfile::tempdir().unwrap();
    let config_dir = tempfile::tempdir().unwrap();

    let treasury = Bond::new("912828M56", BondIdType::Cusip, "T", 2.25, date(2025, 11, 16));
    let two_year = Bond::new("912828TW0", BondIdType::Cusip, "T", 0.75, date(2017, 11, 5));
    write_json(
        &data_dir.path().join("bonds.json"),
        &vec![treasury.clone(), two_year],
    );
    write_json(
        &data_dir.path().join("swaps.json"),
        &vec![
            swap("Spot-Outright-10Y", 10, SwapType::Spot),
            swap("FORWARD-Curve-2Y", 2, SwapType::Forward),
            swap("MAC-Outright-3Y", 3, SwapType::Mac),
        ],
    );
    write_json(
        &data_dir.path().join("futures.json"),
        &vec![
            Future::commodity("C2C5", "Coal", date(2025, 12, 5)),
            Future::bond("XYZ123", treasury.clone(), date(2024, 1, 15)),
            Future::euro_dollar("GEZ5", date(2028, 12, 5)),
        ],
    );

    let paths = path_manager(data_dir.path(), config_dir.path());
    let config = LoaderConfig::load(&paths).unwrap();
    let data = ReferenceData::load(&paths, &config).unwrap();

    assert_eq!(data.bonds.len(), 2);
    assert_eq!(data.bonds.get_data("912828M56"), Ok(treasury));
    assert_eq!(
        data.bonds
            .get_by_equality(&BondAttribute::Ticker("T".to_string()))
            .len(),
        2
    );

    let long: Vec<IrSwap> = data
        .swaps
        .get_by_threshold(SwapField::TermYears, 3.0, Threshold::Above);
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].product_id().as_str(), "Spot-Outright-10Y");

    let bond_futures = data
        .futures
        .get_by_equality(&FutureAttribute::Category(FutureCategory::Bond));
    assert_eq!(bond_futures.len(), 1);
    assert_eq!(bond_futures[0].product_id().as_str(), "XYZ123");
}

#[test]
fn test_config_renames_snapshots_and_missing_ones_are_empty() {
    let _ = env_logger::builder().is_test(true).try_init();
    let data_dir = tempfile::tempdir().unwrap();
    let config_dir = tempfile::tempdir().unwrap();

    write_json(
        &config_dir.path().join("loader.json"),
        &serde_json::json!({ "swaps_file": "irs.json" }),
    );
    write_json(
        &data_dir.path().join("irs.json"),
        &vec![swap("IMM-Outright-5Y", 5, SwapType::Imm)],
    );

    let paths = path_manager(data_dir.path(), config_dir.path());
    let config = LoaderConfig::load(&paths).unwrap();
    let data = ReferenceData::load(&paths, &config).unwrap();

    assert!(data.bonds.is_empty());
    assert!(data.futures.is_empty());
    assert_eq!(data.swaps.len(), 1);
    assert!(matches!(
        data.bonds.get_data("912828M56"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let data_dir = tempfile::tempdir().unwrap();
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(data_dir.path().join("bonds.json"), r#"[{"product_id": 42}]"#).unwrap();

    let paths = path_manager(data_dir.path(), config_dir.path());
    let err = ReferenceData::load(&paths, &LoaderConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load bond snapshot"));
}
