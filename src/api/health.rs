// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Health endpoints.
//!
//! Both paths are on the authentication allowlist so orchestrators can probe
//! the service without credentials.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of the actuator-style health response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// `UP` while the process is serving requests.
    pub status: String,
}

/// Plain liveness probe.
#[utoipa::path(
    get,
    path = "/users/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = String)
    )
)]
pub async fn health() -> &'static str {
    "OK"
}

/// Actuator-style health probe kept for deployments that expect the
/// management path.
#[utoipa::path(
    get,
    path = "/actuator/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    )
)]
pub async fn actuator_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_body_is_ok_literal() {
        assert_eq!(health().await, "OK");
    }

    #[tokio::test]
    async fn actuator_health_reports_up() {
        let Json(body) = actuator_health().await;
        assert_eq!(body.status, "UP");
    }
}
