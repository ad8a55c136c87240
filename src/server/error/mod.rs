//! Error types for the Roster server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, downloads, role lists). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod download;
pub mod role_list;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, download::DownloadError, role_list::RoleListError,
    },
};

/// Main error type for the Roster server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication & authorization errors (session, access denied)
/// - Download errors (missing or foreign files)
/// - Role list errors (invalid IDs, invalid role types, unknown groups)
/// - External library errors (database, sessions, filesystem, JSON)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Async download error.
    #[error(transparent)]
    DownloadError(#[from] DownloadError),
    /// Bulk role list error.
    #[error(transparent)]
    RoleListError(#[from] RoleListError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Roster's code.
    #[error("Internal error with Roster's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Filesystem error while reading or writing downloads.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Errors without a domain mapping are treated as internal server errors (500) and logged.
///
/// # Returns
/// - 400 Bad Request - Malformed person ID lists
/// - 403 Forbidden - Missing management rights on a group
/// - 404 Not Found - Missing users, groups or downloads
/// - 422 Unprocessable Entity - Invalid role types
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DownloadError(err) => err.into_response(),
            Self::RoleListError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
