use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves the ID of the user in session after confirming the user exists
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(i32)`: ID of the user in session
/// - `Err(Error::AuthError(UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_id_from_session(state: &AppState, session: &Session) -> Result<i32, Error> {
    get_optional_user_id_from_session(state, session)
        .await?
        .ok_or(Error::AuthError(AuthError::UserNotInSession))
}

/// Same as [`get_user_id_from_session`] for endpoints open to anonymous users
///
/// A session without a user yields `Ok(None)`. A session pointing at a user that no
/// longer exists is cleared and still fails with `UserNotInDatabase`.
pub async fn get_optional_user_id_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Option<i32>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    if UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .is_none()
    {
        session.clear().await;

        tracing::warn!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    }

    Ok(Some(user_id))
}
