//! # Authentication Module
//!
//! Mock identity check and session persistence.
//!
//! ## Overview
//!
//! There is no real identity model here: a seeded [`UserDirectory`] answers
//! credential checks, and "has a user record" is all that authentication
//! means. [`AuthManager`] keeps the signed-in user in memory and mirrors it
//! into the transient session namespace so a page reload within one process
//! lifetime resumes the session.
//!
//! Credential validators live at the boundary: the core assumes
//! pre-validated input where documented.

pub mod directory;
pub mod error;
pub mod manager;
pub mod types;
pub mod validators;

pub use directory::{DirectoryUser, UserDirectory};
pub use error::{AuthError, Result};
pub use manager::{AuthManager, SESSION_USER_KEY};
pub use types::User;
pub use validators::{is_valid_email, is_valid_password};
