//! Account storage.
//!
//! Handlers only ever see the [`UserStore`] trait; the in-memory map is the
//! sole implementation because accounts are not meant to outlive the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Key-value store of users keyed by email.
pub trait UserStore: Send + Sync {
    fn get(&self, email: &str) -> Option<User>;

    /// Inserts `user` unless its email is already present. The check and the
    /// insert are atomic: of two racing inserts for one email exactly one
    /// reports [`InsertOutcome::Inserted`].
    fn insert_if_absent(&self, user: User) -> InsertOutcome;

    fn len(&self) -> usize;
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, email: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(email).cloned()
    }

    fn insert_if_absent(&self, user: User) -> InsertOutcome {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(&user.email) {
            return InsertOutcome::AlreadyExists;
        }
        users.insert(user.email.clone(), user);
        InsertOutcome::Inserted
    }

    fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
