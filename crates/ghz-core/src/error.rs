//! Catalog configuration errors.

use thiserror::Error;

/// Raised while loading catalogs at startup, never per request.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{catalog} catalog is missing required column '{column}'")]
    MissingColumn {
        catalog: &'static str,
        column: &'static str,
    },
    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open catalog: {0}")]
    Io(#[from] std::io::Error),
}
