use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {user_id} is not the author of recipe ID {recipe_id}")]
    NotAuthor { user_id: i32, recipe_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Authentication credentials were not provided.",
                )
            }
            Self::NotAuthor { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action.",
                )
            }
        }
    }
}
