use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use roster::{model::role_list::RoleListResultDto, server::controller::role_list::destroy};
use roster_test_utils::prelude::*;

use super::params;
use crate::util::{body_json, sign_in};

/// Expect the selected people's roles to be removed with a plural notice
#[tokio::test]
async fn deletes_roles_of_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    let (first, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_MEMBER)
        .await?;
    let (second, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_MEMBER)
        .await?;
    sign_in(&test, leader.id).await;
    let before = test.role().count().await?;

    let result = destroy(
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
    assert_eq!(body.notice, "2 Rollen wurden gelöscht");
    assert_eq!(test.role().count().await?, before - 2);

    Ok(())
}

/// Expect roles of other types to survive
#[tokio::test]
async fn keeps_roles_of_other_types() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let groups = test.group().insert_hierarchy().await?;
    let (leader, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
        .await?;
    let (member, _) = test
        .person()
        .insert_person_with_role(groups.top_group.id, TOP_GROUP_MEMBER)
        .await?;
    test.role()
        .insert_role(member.id, groups.top_group.id, TOP_GROUP_SECRETARY)
        .await?;
    sign_in(&test, leader.id).await;

    let result = destroy(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(params(&[member.id], TOP_GROUP_MEMBER)),
    )
    .await;

    let body: RoleListResultDto = body_json(result.unwrap().into_response()).await?;
    assert_eq!(body.notice, "Eine Rolle wurde gelöscht");
    let roles = test.role().roles_of_person(member.id).await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role_type, TOP_GROUP_SECRETARY);

    Ok(())
}
