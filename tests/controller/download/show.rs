use axum::{
    extract::{Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
};
use cookie::Cookie;
use roster::{
    model::download::DownloadQuery,
    server::{controller::download::show, model::download::file::AsyncDownloadFile},
};
use roster_test_utils::prelude::*;

use super::cookie_headers;
use crate::util::{body_bytes, sign_in};

fn txt() -> Query<DownloadQuery> {
    Query(DownloadQuery {
        file_type: "txt".to_string(),
    })
}

/// Expect the file content and a removal cookie when it was the only pending download
#[tokio::test]
async fn serves_file_and_clears_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", person.id);
    test.download()
        .write_file(&name, "txt", "this is a testfile")
        .await?;
    let headers = cookie_headers(&test, &[(name.as_str(), "txt")])?;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path(name.clone()),
        txt(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain");
    assert_eq!(
        resp.headers()[CONTENT_DISPOSITION],
        format!("attachment; filename=\"{}.txt\"", name).as_str()
    );

    let set_cookie = Cookie::parse_encoded(resp.headers()[SET_COOKIE].to_str().unwrap().to_string())
        .unwrap();
    assert_eq!(set_cookie.name(), "async_downloads");
    assert_eq!(set_cookie.value(), "");
    assert_eq!(set_cookie.max_age(), Some(time::Duration::ZERO));

    assert_eq!(body_bytes(resp).await, b"this is a testfile");

    Ok(())
}

/// Expect only the served entry to be removed from the cookie
#[tokio::test]
async fn keeps_other_pending_downloads() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", person.id);
    test.download()
        .write_file(&name, "txt", "this is a testfile")
        .await?;
    let headers = cookie_headers(&test, &[(name.as_str(), "txt"), ("second_download", "txt")])?;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path(name),
        txt(),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = Cookie::parse_encoded(resp.headers()[SET_COOKIE].to_str().unwrap().to_string())
        .unwrap();
    let entries: serde_json::Value = serde_json::from_str(set_cookie.value())?;
    assert_eq!(
        entries,
        serde_json::json!([{ "name": "second_download", "type": "txt" }])
    );

    Ok(())
}

/// Expect no Set-Cookie header when the request carries no pending downloads
#[tokio::test]
async fn leaves_cookie_untouched_without_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", person.id);
    test.download().write_file(&name, "txt", "data").await?;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(name),
        txt(),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(SET_COOKIE).is_none());

    Ok(())
}

/// Expect 404 for a file prepared for somebody else
#[tokio::test]
async fn not_found_for_foreign_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;
    let name = AsyncDownloadFile::create_name("test", 1234);
    test.download().write_file(&name, "txt", "secret").await?;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(name),
        txt(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a file that does not exist
#[tokio::test]
async fn not_found_for_missing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let person = test.person().insert_person("Bottom", "Member").await?;
    sign_in(&test, person.id).await;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(format!("unknown_1-{}", person.id)),
        txt(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when nobody is signed in
#[tokio::test]
async fn not_found_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_role_tables().build().await?;
    let name = AsyncDownloadFile::create_name("test", 1);
    test.download().write_file(&name, "txt", "data").await?;

    let result = show(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(name),
        txt(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
