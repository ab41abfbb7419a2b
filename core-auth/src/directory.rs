//! Mock user directory.
//!
//! Plaintext passwords are deliberate test-fixture semantics; nothing here
//! pretends to be a production credential store.

use crate::types::User;
use std::fmt;

/// One directory entry: a user record plus its mock password
#[derive(Clone)]
pub struct DirectoryUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

impl DirectoryUser {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    fn as_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

// Keep passwords out of logs even for mock users
impl fmt::Debug for DirectoryUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// In-memory credential directory
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<DirectoryUser>,
}

impl UserDirectory {
    pub fn new(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }

    /// The default development fixtures.
    pub fn seeded() -> Self {
        Self::new(vec![
            DirectoryUser::new("u-1", "joao@teste.com", "Joao", "123456"),
            DirectoryUser::new("u-2", "victor@teste.com", "Victor", "123456"),
        ])
    }

    /// Case-insensitive (and trimmed) email match plus exact password match.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        let normalized = email.trim().to_lowercase();
        self.users
            .iter()
            .find(|u| u.email.to_lowercase() == normalized && u.password == password)
            .map(DirectoryUser::as_user)
    }
}
