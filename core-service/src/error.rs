use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Auth error: {0}")]
    Auth(#[from] core_auth::AuthError),

    #[error("Playlist error: {0}")]
    Playlist(#[from] core_playlists::PlaylistError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
