//! Workspace placeholder crate.
//!
//! This crate exists so host applications can depend on `tracklist-workspace`
//! and reach the individual workspace crates (e.g., `core-service`,
//! `core-search`, `core-playlists`) through a single entry point without
//! wiring each crate individually.

pub use core_service;
