use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster::{
    model::download::{DownloadQuery, DownloadStatusDto},
    server::{controller::download::exists, model::download::file::AsyncDownloadFile},
};
use roster_test_utils::prelude::*;

use crate::util::{body_json, sign_in};

fn txt() -> Query<DownloadQuery> {
    Query(DownloadQuery {
        file_type: "txt".to_string(),
    })
}

/// Expect status 200 for an existing file of the signed in person
#[tokio::test]
async fn reports_existing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", person.id);
    test.download().write_file(&name, "txt", "data").await?;

    let result = exists(
        State(test.to_app_state()),
        test.session.clone(),
        Path(name),
        txt(),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DownloadStatusDto = body_json(resp).await?;
    assert_eq!(body, DownloadStatusDto { status: 200 });

    Ok(())
}

/// Expect status 404 for a missing file
#[tokio::test]
async fn reports_missing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;

    let result = exists(
        State(test.to_app_state()),
        test.session.clone(),
        Path(format!("unknown_1-{}", person.id)),
        txt(),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DownloadStatusDto = body_json(resp).await?;
    assert_eq!(body, DownloadStatusDto { status: 404 });

    Ok(())
}

/// Expect status 404 for a file of another person
#[tokio::test]
async fn reports_foreign_file_as_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", 1234);
    test.download().write_file(&name, "txt", "data").await?;

    let result = exists(
        State(test.to_app_state()),
        test.session.clone(),
        Path(name),
        txt(),
    )
    .await;

    let resp = result.unwrap().into_response();
    let body: DownloadStatusDto = body_json(resp).await?;
    assert_eq!(body, DownloadStatusDto { status: 404 });

    Ok(())
}
