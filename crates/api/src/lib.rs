// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! The API boundary for the dashboard: roles and authorization, request
//! and response DTOs, operations over the shared store, and the external
//! completion-service boundary.
//!
//! Everything HTTP-shaped lives in the server crate; this crate speaks
//! plain Rust types and returns [`ApiError`] values the server translates
//! into status codes.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod model;
pub mod prompt;
pub mod request_response;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::Dashboard;
pub use model::{ModelError, ScheduleModel};
