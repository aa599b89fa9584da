use serde::{Deserialize, Serialize};

/// A registered account. Lives only as long as the process.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The part of a [`User`] that is safe to hand back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
