use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Person ID is not present in session")]
    UserNotInSession,
    #[error("Person ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Person ID {person_id:?} is not allowed to manage group ID {group_id:?}")]
    AccessDenied { person_id: i32, group_id: i32 },
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(person_id) => {
                tracing::debug!(
                    person_id = %person_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::AccessDenied {
                person_id,
                group_id,
            } => {
                tracing::debug!(person_id = %person_id, group_id = %group_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
