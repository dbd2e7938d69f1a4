// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the user-record structures served by the REST API.
//! All types derive `Serialize`, `Deserialize`, and `ToSchema` for automatic
//! JSON handling and OpenAPI documentation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to a stored user record.
///
/// Distinct from the token `scope` claim: the role describes the user in the
/// record store, while the scope describes what the presented token may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Administrative user.
    Admin,
    /// Regular user.
    User,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::User => write!(f, "USER"),
        }
    }
}

/// A stored user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    /// Unique username (also the resource identifier in `/users/{username}`).
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Assigned role.
    pub role: UserRole,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            username: username.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            role,
        }
    }
}
