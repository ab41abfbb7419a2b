use serde::{Deserialize, Serialize};

/// Minimal authenticated user record.
///
/// No token and no expiry: holding a `User` is what "authenticated" means
/// to the rest of the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}
