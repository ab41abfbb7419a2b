use core_catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
