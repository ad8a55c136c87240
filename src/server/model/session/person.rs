use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_PERSON_ID_KEY: &str = "roster:person:id";

/// ID of the signed in person, stored as a string
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionPersonId(pub String);

impl SessionPersonId {
    /// Insert person ID into session
    pub async fn insert(session: &Session, person_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_PERSON_ID_KEY, SessionPersonId(person_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get person ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionPersonId>(SESSION_PERSON_ID_KEY)
            .await?
            .map(|SessionPersonId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session person id: {}", e))
                })
            })
            .transpose()
    }
}
