use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DownloadError {
    /// Covers missing files as well as files owned by someone else.
    #[error("Download {id}.{file_type} not found or not owned by the requesting person")]
    NotFound { id: String, file_type: String },
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
