use axum::{
    extract::{Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        download::{DownloadQuery, DownloadStatusDto},
    },
    server::{
        controller::util::get_person::get_person_from_session,
        error::Error,
        model::{app::AppState, download::cookie::AsyncDownloadCookie},
        service::download::AsyncDownloadService,
    },
};

pub static DOWNLOAD_TAG: &str = "download";

/// Download a prepared file
///
/// Serves the file to the person it was prepared for and drops it from the `async_downloads`
/// cookie. The cookie is cleared once no pending downloads remain. Files of other people are
/// reported as not found.
#[utoipa::path(
    get,
    path = "/api/downloads/{id}",
    tag = DOWNLOAD_TAG,
    params(
        ("id" = String, Path, description = "Name of the download without file extension"),
        DownloadQuery
    ),
    responses(
        (status = 200, description = "File content served as attachment"),
        (status = 404, description = "Download or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let download_service = AsyncDownloadService::new(&state.downloads);

    let file = download_service
        .find_downloadable(person.id, &id, &query.file_type)
        .await?;
    let content = download_service.read(&file).await?;

    let disposition = format!(
        "attachment; filename=\"{}.{}\"",
        file.filename(),
        file.file_type()
    );

    let mut response = (
        StatusCode::OK,
        [
            (CONTENT_TYPE, content.content_type),
            (CONTENT_DISPOSITION, disposition),
        ],
        content.data,
    )
        .into_response();

    let mut cookie = AsyncDownloadCookie::from_headers(&headers);
    if let Some(set_cookie) = cookie.remove(file.filename(), file.file_type())? {
        let value = HeaderValue::from_str(&set_cookie.encoded().to_string()).map_err(|e| {
            Error::InternalError(format!("Failed to build async downloads cookie: {}", e))
        })?;

        response.headers_mut().append(SET_COOKIE, value);
    }

    tracing::debug!(person_id = %person.id, "Served download {}.{}", id, query.file_type);

    Ok(response)
}

/// Check whether a prepared file is available
///
/// Always answers 200, the body's `status` is 200 when the file exists and belongs to the
/// signed in person and 404 otherwise.
#[utoipa::path(
    get,
    path = "/api/downloads/{id}/exists",
    tag = DOWNLOAD_TAG,
    params(
        ("id" = String, Path, description = "Name of the download without file extension"),
        DownloadQuery
    ),
    responses(
        (status = 200, description = "Availability of the download", body = DownloadStatusDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn exists(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;

    let found = AsyncDownloadService::new(&state.downloads)
        .exists(person.id, &id, &query.file_type)
        .await?;

    let status = if found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok((
        StatusCode::OK,
        Json(DownloadStatusDto {
            status: status.as_u16(),
        }),
    ))
}
