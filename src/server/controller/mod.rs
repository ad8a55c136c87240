//! HTTP controller endpoints for the Roster web API.
//!
//! This module contains Axum handlers for async download delivery and bulk role management.
//! Controllers resolve the signed in person from the session, parse request inputs, call into
//! services and return JSON responses. They use utoipa for OpenAPI documentation.

pub mod download;
pub mod role_list;
pub mod util;
