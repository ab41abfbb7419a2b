//! Desktop bridge implementations.
//!
//! Concrete adapters for the capabilities declared in `bridge-traits`:
//!
//! - [`ReqwestHttpClient`] - HTTP via reqwest with retry and backoff
//! - [`JsonFileStore`] - durable key-value storage mirrored to a JSON file
//! - [`MemoryStore`] - transient in-process key-value storage (session
//!   namespace, and the standard fake for tests)

pub mod http;
pub mod storage;

pub use http::ReqwestHttpClient;
pub use storage::{JsonFileStore, MemoryStore};
