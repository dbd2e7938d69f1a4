// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer-token verification.
//!
//! [`verify`] is a pure function over (token, secret, current time): it holds
//! no state, caches nothing, and never logs token material. The middleware is
//! the only production caller.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::claims::Claims;
use super::error::AuthError;

/// HMAC family accepted for the shared-secret deployment. Tokens declaring
/// any other algorithm cannot be checked against the secret and are rejected.
const HMAC_ALGORITHMS: &[Algorithm] = &[Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verify a raw bearer token against the shared secret.
///
/// The caller has already stripped the `Bearer ` prefix. Steps, in order:
/// structural header parse, algorithm check, signature recomputation over
/// header+payload, payload decode, expiration check (zero leeway, absent
/// `exp` means the token does not expire).
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;

    if !HMAC_ALGORITHMS.contains(&header.alg) {
        return Err(AuthError::UnknownVerification);
    }

    let mut validation = Validation::new(header.alg);
    // Expiration is optional and checked manually below.
    validation.required_spec_claims = Default::default();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidToken
            | jsonwebtoken::errors::ErrorKind::Base64(_)
            | jsonwebtoken::errors::ErrorKind::Json(_)
            | jsonwebtoken::errors::ErrorKind::Utf8(_) => AuthError::MalformedToken,
            _ => AuthError::UnknownVerification,
        })?;

    let claims = token_data.claims;

    // Strictly-before comparison, no clock-skew leeway: the issuing services
    // mint 24h tokens, so skew tolerance buys nothing here.
    if let Some(exp) = claims.exp {
        if exp < chrono::Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }
    }

    Ok(claims)
}
