//! Helpers shared by the integration tests.

use axum::response::Response;
use roster::server::model::session::person::SessionPersonId;
use roster_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads the whole response body
pub async fn body_bytes(resp: Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Reads and deserializes a JSON response body
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> Result<T, TestError> {
    Ok(serde_json::from_slice(&body_bytes(resp).await)?)
}

/// Stores `person_id` as the signed in person of the test session
pub async fn sign_in(test: &TestContext, person_id: i32) {
    SessionPersonId::insert(&test.session, person_id)
        .await
        .unwrap();
}
