use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Failed to encode playlists for storage: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
