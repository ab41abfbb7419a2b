//! # Core Configuration Module
//!
//! Builder-pattern configuration holding the bridge handles and settings the
//! core requires.
//!
//! ## Required Dependencies
//!
//! - `HttpClient` - catalog lookups
//! - durable `KeyValueStore` - the playlists namespace (survives restart)
//! - transient `KeyValueStore` - the session namespace (per-process)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .http_client(Arc::new(my_http_client))
//!     .durable_store(Arc::new(my_file_store))
//!     .session_store(Arc::new(my_memory_store))
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::{HttpClient, KeyValueStore};
use std::sync::Arc;

/// Default homepage artists, used when the host does not configure any
pub const DEFAULT_HOME_ARTISTS: [&str; 4] = ["Coldplay", "Queen", "The Beatles", "Adele"];

/// Resolved configuration for the core
#[derive(Clone)]
pub struct CoreConfig {
    /// HTTP client for catalog requests (required)
    pub http_client: Arc<dyn HttpClient>,

    /// Durable key-value namespace for playlists (required)
    pub durable_store: Arc<dyn KeyValueStore>,

    /// Transient key-value namespace for session data (required)
    pub session_store: Arc<dyn KeyValueStore>,

    /// Catalog base URL override; the client's built-in default applies when
    /// absent
    pub catalog_base_url: Option<String>,

    /// Most-loved fallback base URL override
    pub catalog_fallback_url: Option<String>,

    /// Artists shown on the homepage feed
    pub home_artists: Vec<String>,
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`] with fail-fast validation
#[derive(Default)]
pub struct CoreConfigBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    durable_store: Option<Arc<dyn KeyValueStore>>,
    session_store: Option<Arc<dyn KeyValueStore>>,
    catalog_base_url: Option<String>,
    catalog_fallback_url: Option<String>,
    home_artists: Option<Vec<String>>,
}

impl CoreConfigBuilder {
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn durable_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.durable_store = Some(store);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn catalog_base_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_base_url = Some(url.into());
        self
    }

    pub fn catalog_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_fallback_url = Some(url.into());
        self
    }

    pub fn home_artists(mut self, artists: Vec<String>) -> Self {
        self.home_artists = Some(artists);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] naming the first absent required
    /// bridge.
    pub fn build(self) -> Result<CoreConfig> {
        let http_client = self.http_client.ok_or_else(|| Error::CapabilityMissing {
            capability: "HttpClient".to_string(),
            message: "No HTTP client provided. \
                      Desktop: inject bridge_desktop::ReqwestHttpClient."
                .to_string(),
        })?;

        let durable_store = self.durable_store.ok_or_else(|| Error::CapabilityMissing {
            capability: "KeyValueStore (durable)".to_string(),
            message: "No durable store provided for the playlists namespace. \
                      Desktop: inject bridge_desktop::JsonFileStore."
                .to_string(),
        })?;

        let session_store = self.session_store.ok_or_else(|| Error::CapabilityMissing {
            capability: "KeyValueStore (session)".to_string(),
            message: "No transient store provided for the session namespace. \
                      Desktop: inject bridge_desktop::MemoryStore."
                .to_string(),
        })?;

        let home_artists = self.home_artists.unwrap_or_else(|| {
            DEFAULT_HOME_ARTISTS.iter().map(|a| a.to_string()).collect()
        });

        Ok(CoreConfig {
            http_client,
            durable_store,
            session_store,
            catalog_base_url: self.catalog_base_url,
            catalog_fallback_url: self.catalog_fallback_url,
            home_artists,
        })
    }
}
