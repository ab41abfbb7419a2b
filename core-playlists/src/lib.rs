//! # Playlist Management Module
//!
//! Owns the user's playlist collection and provides ownership-checked
//! mutation with a durable key-value mirror.
//!
//! ## Overview
//!
//! This module manages:
//! - The [`Playlist`](models::Playlist) domain model
//! - [`PlaylistStore`](store::PlaylistStore): ownership-checked CRUD and
//!   track membership with an at-most-once invariant, persisting the whole
//!   collection after every mutation
//! - Wholesale rehydration from storage at process start

pub mod error;
pub mod models;
pub mod store;

pub use error::{PlaylistError, Result};
pub use models::Playlist;
pub use store::{PlaylistStore, PLAYLISTS_KEY};
