use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SubscriptionError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("User ID {0} attempted to subscribe to themselves")]
    SelfSubscription(i32),
    #[error("User ID {user_from_id} is already subscribed to user ID {user_to_id}")]
    DuplicateEntry { user_from_id: i32, user_to_id: i32 },
    #[error("User ID {user_from_id} is not subscribed to user ID {user_to_id}")]
    NotSubscribed { user_from_id: i32, user_to_id: i32 },
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::SelfSubscription(_) => {
                error_response(StatusCode::BAD_REQUEST, "You cannot subscribe to yourself.")
            }
            Self::DuplicateEntry { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "You are already subscribed to this user.",
            ),
            Self::NotSubscribed { .. } => error_response(
                StatusCode::NOT_FOUND,
                "You are not subscribed to this user.",
            ),
        }
    }
}
