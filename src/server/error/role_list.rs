use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{AlertDto, ErrorDto};

/// Alert shown when a role type is unknown or not allowed in the target group.
pub static INVALID_ROLE_TYPE_ALERT: &str = "Bitte geben Sie eine valide Rolle an";

#[derive(Error, Debug)]
pub enum RoleListError {
    #[error("Failed to parse person IDs {0:?}")]
    InvalidIds(String),
    #[error("Role type {role_type:?} is not valid for group type {group_type:?}")]
    InvalidRoleType {
        role_type: String,
        group_type: String,
    },
    #[error("Group ID {0:?} not found")]
    GroupNotFound(i32),
}

impl IntoResponse for RoleListError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidIds(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Please provide a comma separated list of person IDs".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidRoleType { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AlertDto {
                    alert: INVALID_ROLE_TYPE_ALERT.to_string(),
                }),
            )
                .into_response(),
            Self::GroupNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Group not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
