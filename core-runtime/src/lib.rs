//! # Core Runtime Module
//!
//! Configuration and logging bootstrap for the core.
//!
//! ## Overview
//!
//! [`CoreConfig`](config::CoreConfig) collects the bridge implementations and
//! settings the core needs, with fail-fast validation: a missing required
//! capability is reported at build time with an actionable message instead of
//! surfacing later as a confusing runtime failure.
//!
//! [`init_logging`](logging::init_logging) wires `tracing-subscriber` with an
//! environment-aware filter and a choice of output formats.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
