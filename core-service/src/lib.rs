//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP, key-value
//! storage) into the shared core and exposes the action surface the
//! presentation layer calls: the search/aggregation queries, the playlist
//! store, and the session manager.
//!
//! ```ignore
//! use bridge_desktop::{JsonFileStore, MemoryStore, ReqwestHttpClient};
//! use core_runtime::CoreConfig;
//! use core_service::CoreService;
//! use std::sync::Arc;
//!
//! # async fn example() -> core_service::Result<()> {
//! let config = CoreConfig::builder()
//!     .http_client(Arc::new(ReqwestHttpClient::new()))
//!     .durable_store(Arc::new(JsonFileStore::open("playlists.json").await?))
//!     .session_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .expect("missing capability");
//!
//! let core = CoreService::new(config);
//! core.start().await?; // resume playlists and session
//!
//! let feed = core.home_feed().await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod validate;

pub use error::{CoreError, Result};
pub use validate::{validate_playlist_name, MAX_PLAYLIST_NAME_LEN};

// Boundary validators live next to the surface that needs them
pub use core_auth::validators::{is_valid_email, is_valid_password};

use core_auth::{AuthManager, UserDirectory};
use core_catalog::audiodb::{AUDIODB_API_BASE, AUDIODB_FALLBACK_BASE};
use core_catalog::{AudioDbClient, CatalogSource, Track};
use core_playlists::PlaylistStore;
use core_runtime::CoreConfig;
use core_search::SearchService;
use std::sync::Arc;
use tracing::info;

/// Primary façade exposed to host applications
pub struct CoreService {
    auth: AuthManager,
    playlists: PlaylistStore,
    search: SearchService,
    home_artists: Vec<String>,
}

impl CoreService {
    /// Wire the services from a validated configuration.
    pub fn new(config: CoreConfig) -> Self {
        let catalog: Arc<dyn CatalogSource> = Arc::new(AudioDbClient::with_base_urls(
            config.http_client.clone(),
            config
                .catalog_base_url
                .unwrap_or_else(|| AUDIODB_API_BASE.to_string()),
            config
                .catalog_fallback_url
                .unwrap_or_else(|| AUDIODB_FALLBACK_BASE.to_string()),
        ));

        Self {
            auth: AuthManager::new(UserDirectory::seeded(), config.session_store),
            playlists: PlaylistStore::new(config.durable_store),
            search: SearchService::new(catalog),
            home_artists: config.home_artists,
        }
    }

    /// Resume persisted state: the playlist collection and any session user.
    pub async fn start(&self) -> Result<()> {
        self.playlists.hydrate().await?;
        self.auth.hydrate().await?;
        info!("Core started");
        Ok(())
    }

    /// Session manager (login/logout/current user).
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Ownership-checked playlist collection.
    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Search actions and the observable query/result state.
    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// The homepage feed over the configured artists.
    pub async fn home_feed(&self) -> core_search::Result<Vec<Track>> {
        self.search.home_feed(&self.home_artists).await
    }
}
