// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User-record endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::{access, Auth, AuthDecision};
use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;

/// List all user records.
///
/// Any authenticated caller may list; only the per-user endpoint carries a
/// resource-level rule.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All user records", body = [User]),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.list_users())
}

/// Fetch a single user record by username.
///
/// The caller must either own the record (case-insensitive username match)
/// or hold a `"read"`-scoped token.
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    security(("bearer" = [])),
    params(
        ("username" = String, Path, description = "Username owning the record")
    ),
    responses(
        (status = 200, description = "The requested user record", body = User),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 403, description = "Authenticated but not entitled to this record"),
        (status = 404, description = "No record with this username"),
    )
)]
pub async fn get_user(
    Auth(claims): Auth,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, ApiError> {
    if access::authorize(&claims, &username) == AuthDecision::Deny {
        tracing::warn!(
            subject = %claims.username,
            requested = %username,
            "resource access denied"
        );
        return Err(ApiError::forbidden("No access for requested entity"));
    }

    let store = state.store.read().await;
    let user = store.user_by_username(&username)?;
    Ok(Json(user))
}
