// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Users API - JWT-gated user-record service
//!
//! This crate serves a small user-record API behind a stateless JWT bearer
//! authentication gate. Tokens are signed with a pre-shared HMAC secret by a
//! companion issuing service; this service only verifies.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token verification, request gate, and the per-resource
//!   authorization rule
//! - `store` - In-memory user-record store (collaborator stand-in)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
