//! # Reference Data Core Library
//!
//! Runtime support for the reference data catalogs defined in the `refdata` crate.
//!
//! ## Modules
//! - `args`: Standardized argument parsing.
//! - `config`: Loader configuration read from the config directory.
//! - `fs`: Centralized file system paths and snapshot reading.
//! - `loader`: Populates the catalogs from JSON snapshots.
//! - `shared`: Thread-safe catalog handle (readers-writer lock).

pub mod args;
pub mod config;
pub mod error;
pub mod fs;
pub mod loader;
pub mod shared;

pub use error::CoreError;
pub use loader::ReferenceData;
pub use shared::SharedCatalog;
