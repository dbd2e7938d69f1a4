// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module gates every inbound request with JWT bearer authentication
//! and provides the per-resource authorization rule.
//!
//! ## Auth Flow
//!
//! 1. A companion service issues `Authorization: Bearer <JWT>` tokens signed
//!    with the shared HMAC secret (`JWT_SECRET`).
//! 2. The [`middleware`] runs once per request:
//!    - exact-allowlist health paths pass unauthenticated
//!    - `OPTIONS` pre-flight requests short-circuit with `200`
//!    - everything else must carry a verifiable bearer token
//! 3. On success the verified [`Claims`] are attached to the request
//!    extensions; handlers read them back through the [`Auth`] extractor.
//! 4. The per-user endpoint calls [`access::authorize`] before returning
//!    record data: owner access is matched case-insensitively on username,
//!    and a `scope` claim of `"read"` grants cross-user read access for
//!    service-to-service calls.
//!
//! ## Security
//!
//! - All non-allowlisted endpoints require authentication
//! - Verification is pure per request; nothing is cached across requests
//! - Raw tokens and the signing secret are never logged

pub mod access;
pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod verifier;

pub use access::AuthDecision;
pub use claims::Claims;
pub use error::AuthError;
pub use extractor::Auth;
