//! # Catalog Client Module
//!
//! Normalizes the third-party music catalog (a TheAudioDB-shaped JSON API)
//! into canonical [`Track`](models::Track) values and exposes the lookup
//! operations the rest of the core consumes.
//!
//! ## Overview
//!
//! This module manages:
//! - Total, alias-tolerant mapping of raw catalog records into `Track`
//! - The [`CatalogSource`](source::CatalogSource) trait the aggregation and
//!   search layers depend on
//! - [`AudioDbClient`](audiodb::AudioDbClient), the HTTP-backed implementation
//!   with the "not found is an empty list" rule and the most-loved fallback
//!   source

pub mod audiodb;
pub mod error;
pub mod models;
pub mod source;

pub use audiodb::AudioDbClient;
pub use error::{CatalogError, Result};
pub use models::{Track, Year};
pub use source::CatalogSource;
