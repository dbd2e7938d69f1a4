// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! The internal taxonomy is finer than what clients see: every variant maps
//! to `401 Unauthorized`, and the response body collapses to one of three
//! fixed literals. Signature mismatches are kept distinct internally so a
//! future alerting hook can tell forged tokens from stale or garbled ones.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Token-verification failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// `Authorization` header absent, unreadable, or missing the exact
    /// `Bearer ` prefix. Verification is never attempted in this case.
    #[error("missing or malformed Authorization header")]
    MissingOrMalformedHeader,
    /// Token is structurally invalid (segment count, encoding, payload).
    #[error("token is structurally invalid")]
    MalformedToken,
    /// Recomputed signature does not match the token's.
    #[error("token signature mismatch")]
    InvalidSignature,
    /// Token expiration is in the past.
    #[error("token has expired")]
    Expired,
    /// Any verification fault not otherwise classified.
    #[error("token verification failed")]
    UnknownVerification,
}

/// Client-visible body: a single `error` field with a fixed literal.
#[derive(Serialize)]
struct AuthErrorBody {
    error: &'static str,
}

impl AuthError {
    /// The externally visible error literal.
    ///
    /// The wire contract exposes only three messages; the finer internal
    /// variants collapse onto them.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::MissingOrMalformedHeader => "Missing or invalid Authorization header",
            AuthError::InvalidSignature => "Invalid token",
            AuthError::MalformedToken | AuthError::Expired | AuthError::UnknownVerification => {
                "Token parsing error"
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(AuthErrorBody {
            error: self.client_message(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_header_body_is_exact() {
        let response = AuthError::MissingOrMalformedHeader.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"Missing or invalid Authorization header"}"#);
    }

    #[tokio::test]
    async fn signature_mismatch_body_is_exact() {
        let response = AuthError::InvalidSignature.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"Invalid token"}"#);
    }

    #[test]
    fn non_signature_faults_collapse_to_parsing_error() {
        for err in [
            AuthError::MalformedToken,
            AuthError::Expired,
            AuthError::UnknownVerification,
        ] {
            assert_eq!(err.client_message(), "Token parsing error");
        }
    }
}
