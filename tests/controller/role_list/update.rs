use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use roster::{
    model::{
        api::AlertDto,
        role_list::{RoleDescriptorDto, RoleListResultDto, RoleListUpdateParams},
    },
    server::controller::role_list::update,
};
use roster_test_utils::prelude::*;

use super::join_ids;
use crate::util::{body_json, sign_in};

fn update_params(
    ids: &[i32],
    moving_role_type: &str,
    role_type: &str,
    group_id: Option<i32>,
) -> RoleListUpdateParams {
    RoleListUpdateParams {
        ids: join_ids(ids),
        moving_role_type: moving_role_type.to_string(),
        role: RoleDescriptorDto {
            role_type: role_type.to_string(),
            group_id,
        },
    }
}

/// Expect all selected roles to move into the target group with the new type
#[tokio::test]
async fn moves_roles_to_other_group() -> Result<(), TestError> {
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

    let result = update(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(update_params(
            &[first.id, second.id],
            TOP_GROUP_MEMBER,
            TOP_LAYER_TOP_ADMIN,
            Some(groups.top_layer.id),
        )),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: RoleListResultDto = body_json(resp).await?;
    assert_eq!(body.count, 2);
    assert_eq!(body.notice, "2 Rollen wurden verschoben");
    assert_eq!(test.role().count().await?, before);

    for person_id in [first.id, second.id] {
        let roles = test.role().roles_of_person(person_id).await?;
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].group_id, groups.top_layer.id);
        assert_eq!(roles[0].role_type, TOP_LAYER_TOP_ADMIN);
    }

    Ok(())
}

/// Expect the type to change within the same group when no target group is given
#[tokio::test]
async fn retypes_roles_in_same_group() -> Result<(), TestError> {
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
    sign_in(&test, leader.id).await;

    let result = update(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(update_params(
            &[member.id],
            TOP_GROUP_MEMBER,
            TOP_GROUP_SECRETARY,
            None,
        )),
    )
    .await;

    let body: RoleListResultDto = body_json(result.unwrap().into_response()).await?;
    assert_eq!(body.notice, "Eine Rolle wurde verschoben");
    let roles = test.role().roles_of_person(member.id).await?;
    assert_eq!(roles[0].group_id, groups.top_group.id);
    assert_eq!(roles[0].role_type, TOP_GROUP_SECRETARY);

    Ok(())
}

/// Expect 422 with the invalid role alert and no moved roles
#[tokio::test]
async fn rejects_invalid_role_type() -> Result<(), TestError> {
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

    let result = update(
        State(test.to_app_state()),
        test.session.clone(),
        Path(groups.top_group.id),
        Json(update_params(
            &[first.id, second.id],
            TOP_GROUP_MEMBER,
            "invalid",
            Some(groups.top_layer.id),
        )),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: AlertDto = body_json(resp).await?;
    assert_eq!(body.alert, "Bitte geben Sie eine valide Rolle an");

    for person_id in [first.id, second.id] {
        let roles = test.role().roles_of_person(person_id).await?;
        assert_eq!(roles[0].group_id, groups.top_group.id);
        assert_eq!(roles[0].role_type, TOP_GROUP_MEMBER);
    }

    Ok(())
}
