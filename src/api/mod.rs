// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::require_auth;
use crate::models::{User, UserRole};
use crate::state::AppState;

pub mod health;
pub mod users;

pub fn router(state: AppState) -> Router {
    // Health routes sit inside the gated router; the middleware allowlists
    // their exact paths.
    let routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/health", get(health::health))
        .route("/users/{username}", get(users::get_user))
        .route("/actuator/health", get(health::actuator_health))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::actuator_health,
        users::list_users,
        users::get_user
    ),
    components(schemas(User, UserRole, health::HealthStatus)),
    modifiers(&BearerSecurity),
    tags(
        (name = "Health", description = "Unauthenticated liveness probes"),
        (name = "Users", description = "User-record access")
    )
)]
struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
