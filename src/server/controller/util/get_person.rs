use tower_sessions::Session;

use crate::server::{
    data::person::PersonRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::PersonModel, session::person::SessionPersonId},
};

/// Retrieves the signed in person from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The person's session
///
/// # Returns
/// - `Ok(PersonModel)`: Person found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: Person ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Person ID exists in session but not
///   in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_person_from_session(
    state: &AppState,
    session: &Session,
) -> Result<PersonModel, Error> {
    let Some(person_id) = SessionPersonId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(person) = PersonRepository::new(&state.db).get(person_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for person ID {} with active session but was not found in database",
            person_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(person_id)));
    };

    Ok(person)
}
