//! Tests for the async download endpoints.

mod exists;
mod show;

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use roster_test_utils::prelude::*;

/// Request headers carrying an `async_downloads` cookie with `entries`
fn cookie_headers(test: &TestContext, entries: &[(&str, &str)]) -> Result<HeaderMap, TestError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&test.download().cookie_header(entries)?).unwrap(),
    );

    Ok(headers)
}
