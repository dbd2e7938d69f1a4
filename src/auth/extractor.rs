// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for verified claims.
//!
//! Use the `Auth` extractor in handlers behind the authentication gate:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(claims): Auth) -> impl IntoResponse {
//!     // claims were verified by the middleware
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::Claims;
use crate::error::ApiError;

/// Extractor for the claims the middleware attached to the request.
///
/// The middleware guarantees that claims are present for any route that
/// reaches a handler behind the gate. A missing claim set therefore means
/// the request chain is mis-wired (a route was added outside the
/// authentication layer) - a programming error surfaced as a `500`, never as
/// a `401` or a deny.
#[derive(Debug)]
pub struct Auth(pub Claims);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Claims>().cloned() {
            Some(claims) => Ok(Auth(claims)),
            None => {
                tracing::error!(
                    path = %parts.uri.path(),
                    "handler reached without verified claims; route is outside the auth layer"
                );
                Err(ApiError::internal("Did not receive required data from JWT token"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    #[tokio::test]
    async fn extractor_reads_claims_from_extensions() {
        let mut parts = Request::builder()
            .uri("/users/johnd")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        parts.extensions.insert(Claims::new("johnd", "write"));

        let Auth(claims) = Auth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(claims.username, "johnd");
        assert_eq!(claims.scope, "write");
    }

    #[tokio::test]
    async fn missing_claims_is_an_internal_fault() {
        let mut parts = Request::builder()
            .uri("/users/johnd")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = Auth::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
