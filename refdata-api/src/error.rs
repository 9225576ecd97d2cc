use thiserror::Error;

/// Errors raised by catalog lookups.
///
/// Queries never fail; only point lookups can miss.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record is stored under the requested id.
    #[error("No record found for id {id}")]
    NotFound { id: String },
}

/// A specialized Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
