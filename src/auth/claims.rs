// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verified JWT claims.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Claim set produced by successful token verification.
///
/// Created once per request by [`crate::auth::verifier::verify`], attached
/// to the request extensions by the middleware, and read-only from then on.
/// Never persisted or cached across requests.
///
/// `username` and `scope` are both optional in the payload; an absent claim
/// deserializes to the empty string, which the authorization rule treats as
/// "no identity" / "no privileged scope".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the token subject.
    #[serde(default)]
    pub username: String,

    /// Capability class granted to the token. The literal `"read"` permits
    /// cross-user read access (service-to-service calls).
    #[serde(default)]
    pub scope: String,

    /// Expiration as a Unix timestamp. Tokens without one do not expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Additional claims carried in the payload, passed through unexamined.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Build a claim set for a plain user token (no extra claims).
    pub fn new(username: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            scope: scope.into(),
            exp: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_exp(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_username_and_scope_default_to_empty() {
        let claims: Claims = serde_json::from_str("{}").unwrap();
        assert_eq!(claims.username, "");
        assert_eq!(claims.scope, "");
        assert_eq!(claims.exp, None);
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn unknown_claims_are_passed_through() {
        let claims: Claims = serde_json::from_str(
            r#"{"username":"johnd","scope":"read","iat":1700000000,"iss":"auth-api"}"#,
        )
        .unwrap();
        assert_eq!(claims.username, "johnd");
        assert_eq!(claims.scope, "read");
        assert_eq!(claims.extra["iat"], 1700000000);
        assert_eq!(claims.extra["iss"], "auth-api");
    }

    #[test]
    fn exp_is_optional() {
        let claims: Claims = serde_json::from_str(r#"{"username":"johnd","exp":123}"#).unwrap();
        assert_eq!(claims.exp, Some(123));
    }
}
