use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{AlertDto, ErrorDto},
        role_list::{
            RoleListDeletableQuery, RoleListMoveDto, RoleListMoveQuery, RoleListParams,
            RoleListResultDto, RoleListUpdateParams, RoleTypeCountDto,
        },
    },
    server::{
        controller::util::{get_person::get_person_from_session, ids::parse_person_ids},
        error::Error,
        model::app::AppState,
        service::role_list::RoleListService,
    },
};

pub static ROLE_LIST_TAG: &str = "role_list";

/// Create a role for each of the given people
///
/// People who already hold the role in the group are skipped.
#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/role_list",
    tag = ROLE_LIST_TAG,
    params(("group_id" = i32, Path, description = "Group the roles are created in")),
    request_body = RoleListParams,
    responses(
        (status = 200, description = "Number of created roles", body = RoleListResultDto),
        (status = 400, description = "Malformed person IDs", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the group", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 422, description = "Role type not valid for the group", body = AlertDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(params): Json<RoleListParams>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let person_ids = parse_person_ids(&params.ids)?;

    let result = RoleListService::new(&state.db)
        .create(person.id, group_id, &person_ids, &params.role.role_type)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Delete the given people's roles of a type
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}/role_list",
    tag = ROLE_LIST_TAG,
    params(("group_id" = i32, Path, description = "Group the roles are deleted from")),
    request_body = RoleListParams,
    responses(
        (status = 200, description = "Number of deleted roles", body = RoleListResultDto),
        (status = 400, description = "Malformed person IDs", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the group", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 422, description = "Role type not valid for the group", body = AlertDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn destroy(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(params): Json<RoleListParams>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let person_ids = parse_person_ids(&params.ids)?;

    let result = RoleListService::new(&state.db)
        .destroy(person.id, group_id, &person_ids, &params.role.role_type)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Move the given people's roles of `moving_role_type` to another type and group
///
/// The target group defaults to the group in the path. Requires management rights on both
/// groups.
#[utoipa::path(
    put,
    path = "/api/groups/{group_id}/role_list",
    tag = ROLE_LIST_TAG,
    params(("group_id" = i32, Path, description = "Group the roles are moved out of")),
    request_body = RoleListUpdateParams,
    responses(
        (status = 200, description = "Number of moved roles", body = RoleListResultDto),
        (status = 400, description = "Malformed person IDs", body = ErrorDto),
        (status = 403, description = "Not allowed to manage source or target group", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 422, description = "Role type not valid for the target group", body = AlertDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(params): Json<RoleListUpdateParams>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let person_ids = parse_person_ids(&params.ids)?;
    let target_group_id = params.role.group_id.unwrap_or(group_id);

    let result = RoleListService::new(&state.db)
        .update(
            person.id,
            group_id,
            &person_ids,
            &params.moving_role_type,
            &params.role.role_type,
            target_group_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Summary of the roles a move would affect
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/role_list/move",
    tag = ROLE_LIST_TAG,
    params(
        ("group_id" = i32, Path, description = "Group the roles are moved out of"),
        RoleListMoveQuery
    ),
    responses(
        (status = 200, description = "People, role type and number of roles to move", body = RoleListMoveDto),
        (status = 400, description = "Malformed person IDs", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the group", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_roles(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Query(query): Query<RoleListMoveQuery>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let person_ids = parse_person_ids(&query.ids)?;

    let summary = RoleListService::new(&state.db)
        .move_summary(person.id, group_id, &query.ids, &person_ids, &query.role_type)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Roles per type the given people hold in the group
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/role_list/deletable",
    tag = ROLE_LIST_TAG,
    params(
        ("group_id" = i32, Path, description = "Group to count roles in"),
        RoleListDeletableQuery
    ),
    responses(
        (status = 200, description = "Number of roles per role type", body = Vec<RoleTypeCountDto>),
        (status = 400, description = "Malformed person IDs", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the group", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deletable(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Query(query): Query<RoleListDeletableQuery>,
) -> Result<impl IntoResponse, Error> {
    let person = get_person_from_session(&state, &session).await?;
    let person_ids = parse_person_ids(&query.ids)?;

    let counts = RoleListService::new(&state.db)
        .deletable(person.id, group_id, &person_ids)
        .await?;

    Ok((StatusCode::OK, Json(counts)))
}
