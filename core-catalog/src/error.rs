use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog HTTP error: status {status}")]
    Http { status: u16 },

    #[error("Failed to parse catalog response: {0}")]
    Json(String),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
