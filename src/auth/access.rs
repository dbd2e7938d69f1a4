// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-resource authorization rule.
//!
//! Separated from the handlers so the decision is independently testable and
//! reusable by future resource-scoped endpoints. The rule never writes the
//! HTTP response; callers convert [`AuthDecision::Deny`] to a `403`.

use super::claims::Claims;

/// Scope literal granting cross-user read access. Trusted services mint
/// tokens with this scope to fetch arbitrary user records. The comparison is
/// case-sensitive, unlike the username match.
pub const READ_SCOPE: &str = "read";

/// Outcome of a per-resource authorization check. Computed once per request,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    Deny,
}

/// Decide whether the authenticated caller may access the record owned by
/// `requested_username`.
///
/// Allowed when the caller requests their own record (case-insensitive
/// username match) or holds a `"read"`-scoped token. An empty `username`
/// claim only matches an empty requested name, and an empty `scope` grants
/// nothing.
pub fn authorize(claims: &Claims, requested_username: &str) -> AuthDecision {
    if requested_username.to_lowercase() == claims.username.to_lowercase() {
        return AuthDecision::Allow;
    }

    if claims.scope == READ_SCOPE {
        return AuthDecision::Allow;
    }

    AuthDecision::Deny
}
