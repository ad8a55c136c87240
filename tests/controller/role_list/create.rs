use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use roster::{
    model::{
        api::AlertDto,
        role_list::{RoleListParams, RoleListResultDto},
    },
    server::controller::role_list::create,
};
use roster_test_utils::prelude::*;

use super::params;
use crate::util::{body_json, sign_in};

/// Expect one new role per person and a plural notice
#[tokio::test]
async fn creates_roles_for_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    let (first, _) = test
        .person()
        .insert_person_with_role(groups.bottom_layer.id, BOTTOM_LAYER_MEMBER)
        .await?;
    let (second, _) = test
        .person()
        .insert_person_with_role(groups.bottom_group.id, BOTTOM_GROUP_MEMBER)
        .await?;
    sign_in(&test, leader.id).await;
    let before = test.role().count().await?;

    let result = create(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(params(&[first.id, second.id], TOP_GROUP_MEMBER)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: RoleListResultDto = body_json(resp).await?;
    assert_eq!(body.count, 2);
    assert_eq!(body.notice, "2 Rollen wurden erstellt");
    assert_eq!(test.role().count().await?, before + 2);

    Ok(())
}

/// Expect a singular notice for a single person
#[tokio::test]
async fn creates_single_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, leader.id).await;

    let result = create(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(params(&[person.id], TOP_GROUP_MEMBER)),
    )
    .await;

    let body: RoleListResultDto = body_json(result.unwrap().into_response()).await?;
    assert_eq!(body.notice, "Eine Rolle wurde erstellt");

    Ok(())
}

/// Expect 422 with the invalid role alert and no new roles
#[tokio::test]
async fn rejects_invalid_role_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, leader.id).await;
    let before = test.role().count().await?;

    let result = create(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(params(&[person.id], "invalid")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: AlertDto = body_json(resp).await?;
    assert_eq!(body.alert, "Bitte geben Sie eine valide Rolle an");
    assert_eq!(test.role().count().await?, before);

    Ok(())
}

/// Expect 400 for a malformed ID list
#[tokio::test]
async fn rejects_malformed_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    sign_in(&test, leader.id).await;

    let mut body: RoleListParams = params(&[], TOP_GROUP_MEMBER);
    body.ids = "1,abc".to_string();

    let result = create(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(body),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an unknown group
#[tokio::test]
async fn not_found_for_unknown_group() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    sign_in(&test, leader.id).await;

    let result = create(
        State(test.to_app_state()),
        test.session.clone(),
        Path(9999),
        Json(params(&[leader.id], TOP_GROUP_MEMBER)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
