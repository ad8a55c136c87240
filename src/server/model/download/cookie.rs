use axum::http::{header::COOKIE, HeaderMap};
use cookie::Cookie;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

pub const ASYNC_DOWNLOADS_COOKIE: &str = "async_downloads";

/// A download the client is waiting for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncDownloadEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// Client-side list of pending downloads, stored as a JSON array in the
/// `async_downloads` cookie.
///
/// Mutations return the `Cookie` that has to be sent back to the client; once the last entry
/// is removed that cookie is a removal cookie which clears it on the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsyncDownloadCookie {
    entries: Vec<AsyncDownloadEntry>,
}

impl AsyncDownloadCookie {
    /// Reads the pending downloads from the request's `Cookie` headers.
    ///
    /// A missing or malformed cookie is treated as an empty list.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|header| Cookie::split_parse_encoded(header))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == ASYNC_DOWNLOADS_COOKIE)
            .map(|cookie| cookie.value().to_string());

        let Some(value) = value else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<AsyncDownloadEntry>>(&value) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::debug!("Ignoring malformed {} cookie: {}", ASYNC_DOWNLOADS_COOKIE, e);

                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[AsyncDownloadEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a pending download and returns the updated cookie.
    pub fn set(
        &mut self,
        name: &str,
        file_type: &str,
    ) -> Result<Cookie<'static>, serde_json::Error> {
        self.entries.push(AsyncDownloadEntry {
            name: name.to_string(),
            file_type: file_type.to_string(),
        });

        self.to_cookie()
    }

    /// Removes a served download.
    ///
    /// Returns `None` if no entry matched, otherwise the cookie to send back which is a removal
    /// cookie when no entries remain.
    pub fn remove(
        &mut self,
        name: &str,
        file_type: &str,
    ) -> Result<Option<Cookie<'static>>, serde_json::Error> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.name == name && entry.file_type == file_type));

        if self.entries.len() == before {
            return Ok(None);
        }

        if self.entries.is_empty() {
            return Ok(Some(Self::removal_cookie()));
        }

        self.to_cookie().map(Some)
    }

    fn to_cookie(&self) -> Result<Cookie<'static>, serde_json::Error> {
        let value = serde_json::to_string(&self.entries)?;

        Ok(Cookie::build((ASYNC_DOWNLOADS_COOKIE, value))
            .path("/")
            .expires(OffsetDateTime::now_utc() + Duration::days(1))
            .build())
    }

    fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build((ASYNC_DOWNLOADS_COOKIE, "")).path("/").build();
        cookie.make_removal();

        cookie
    }
}
