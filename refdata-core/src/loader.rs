//! Populates the catalogs from JSON snapshots in the data directory.
//!
//! A snapshot is a JSON array of records of one product family. Records are
//! added in file order, so a duplicated id keeps its last occurrence.

use crate::config::LoaderConfig;
use crate::fs::{load_state, PathManager};
use crate::shared::SharedCatalog;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use refdata::{Bond, Catalog, Future, IrSwap, Product, ProductId, Record};
use serde::de::DeserializeOwned;
use std::path::Path;

/// The catalogs of every product family, ready to be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub bonds: SharedCatalog<ProductId, Bond>,
    pub swaps: SharedCatalog<ProductId, IrSwap>,
    pub futures: SharedCatalog<ProductId, Future>,
}

impl ReferenceData {
    /// Loads every snapshot named by `config`.
    ///
    /// Missing snapshots yield empty catalogs; unreadable or malformed ones are errors.
    pub fn load(path_manager: &PathManager, config: &LoaderConfig) -> Result<Self> {
        let bonds = load_catalog::<Bond>(&path_manager.get_data_file_path(&config.bonds_file))?;
        let swaps = load_catalog::<IrSwap>(&path_manager.get_data_file_path(&config.swaps_file))?;
        let futures =
            load_catalog::<Future>(&path_manager.get_data_file_path(&config.futures_file))?;

        Ok(Self {
            bonds: bonds.into(),
            swaps: swaps.into(),
            futures: futures.into(),
        })
    }
}

/// Loads one snapshot into a fresh catalog.
pub fn load_catalog<V>(file_path: &Path) -> Result<Catalog<ProductId, V>>
where
    V: Product + DeserializeOwned,
{
    let mut catalog = Catalog::new();

    if !file_path.exists() {
        warn!(
            "No {} snapshot at {:?}, starting empty",
            V::PRODUCT_TYPE,
            file_path
        );
        return Ok(catalog);
    }

    let records: Vec<V> = load_state(file_path).with_context(|| {
        format!(
            "Failed to load {} snapshot from {:?}",
            V::PRODUCT_TYPE,
            file_path
        )
    })?;

    let total = records.len();
    for record in records {
        if catalog.contains(record.key()) {
            debug!(
                "Duplicate {} id {} in snapshot, keeping the later record",
                V::PRODUCT_TYPE,
                record.key()
            );
        }
        catalog.add(record);
    }

    info!(
        "Loaded {} {} records ({} distinct ids) from {:?}",
        total,
        V::PRODUCT_TYPE,
        catalog.len(),
        file_path
    );
    Ok(catalog)
}
