// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup and never mutated afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | Shared HMAC secret for bearer-token verification | `foo` (development only) |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the shared JWT signing secret.
///
/// The secret is pre-shared with the token-issuing service. It is read once
/// at process start and held in [`crate::state::AuthConfig`]; it is never
/// logged and never rotated at runtime.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Fallback secret used when `JWT_SECRET` is unset.
///
/// Matches the development default of the companion services. Startup logs a
/// warning whenever this fallback is in effect.
pub const DEV_JWT_SECRET: &str = "foo";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Exact request paths exempt from authentication.
///
/// Matching is exact and case-sensitive; prefix matching would let nested
/// routes slip past the gate.
pub const DEFAULT_ALLOWLIST: &[&str] = &["/users/health", "/actuator/health"];
