// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Single entry point for every inbound request. The flow is strictly
//! linear with two early exits and no state carried between requests:
//!
//! 1. Exact-allowlist path → pass through unauthenticated
//! 2. `OPTIONS` pre-flight → short-circuit `200 OK` (no credential payload)
//! 3. Extract the `Bearer ` token, verify it, attach the claims to the
//!    request extensions, and run the rest of the chain
//!
//! Every failure is terminal for the request and answered with one of the
//! fixed `401` bodies from [`AuthError`]. Token contents are never logged.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AuthError;
use super::verifier;
use crate::state::AppState;

/// Authentication middleware function.
///
/// Apply to the API router with
/// `axum::middleware::from_fn_with_state(state, require_auth)`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    if state.auth.is_allowlisted(&path) {
        return next.run(request).await;
    }

    // Pre-flight requests carry no authorization-relevant payload.
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let verified = match bearer_token(request.headers()) {
        Some(token) => verifier::verify(token, &state.auth.secret),
        None => Err(AuthError::MissingOrMalformedHeader),
    };

    match verified {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(error = %err, path = %path, "request authentication failed");
            err.into_response()
        }
    }
}

/// Extract the raw token following the exact, case-sensitive `Bearer `
/// prefix. Returns `None` for an absent, unreadable, or differently shaped
/// header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_strips_exact_prefix() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_prefix_is_case_sensitive() {
        assert_eq!(bearer_token(&headers_with_auth("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with_auth("BEARER abc")), None);
    }

    #[test]
    fn missing_or_differently_shaped_headers_yield_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with_auth("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with_auth("Bearerabc")), None);
    }
}
