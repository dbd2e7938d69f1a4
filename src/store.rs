// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory user-record store.
//!
//! The persistence layer proper is an external collaborator of this service;
//! this store implements only the contract the handlers consume: lookup by
//! username and list-all. Records are seeded at startup and read-only
//! afterwards.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{User, UserRole};

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<String, User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the default demo records shared with
    /// the companion services.
    pub fn with_seed_users() -> Self {
        let mut store = Self::new();
        store.insert_user(User::new("admin", "Admin", "Admin", UserRole::Admin));
        store.insert_user(User::new("johnd", "John", "Doe", UserRole::User));
        store.insert_user(User::new("janed", "Jane", "Doe", UserRole::User));
        store
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }

    /// Exact-match lookup. Authorization uses a case-insensitive username
    /// comparison, but stored usernames are looked up verbatim.
    pub fn user_by_username(&self, username: &str) -> Result<User, ApiError> {
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_demo_users() {
        let store = InMemoryStore::with_seed_users();
        assert_eq!(store.list_users().len(), 3);
        assert_eq!(
            store.user_by_username("johnd").unwrap().firstname,
            "John"
        );
    }

    #[test]
    fn unknown_username_is_not_found() {
        let store = InMemoryStore::with_seed_users();
        let err = store.user_by_username("ghost").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn lookup_is_exact_match() {
        let store = InMemoryStore::with_seed_users();
        assert!(store.user_by_username("JOHND").is_err());
    }

    #[test]
    fn list_is_sorted_by_username() {
        let store = InMemoryStore::with_seed_users();
        let names: Vec<String> = store
            .list_users()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["admin", "janed", "johnd"]);
    }
}
