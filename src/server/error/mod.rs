//! Error types for the recipebox server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, recipes, tags, shopping cart, favorites,
//! subscriptions, short codes). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod cart;
pub mod config;
pub mod favorite;
pub mod recipe;
pub mod short_code;
pub mod subscription;
pub mod tag;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, cart::CartError, config::ConfigError, favorite::FavoriteError,
        recipe::RecipeError, short_code::ShortCodeError, subscription::SubscriptionError,
        tag::TagError,
    },
};

/// Main error type for the recipebox server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// error type, converting from the underlying errors via `#[from]` so `?` can be used
/// throughout the service and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user in session, not the author).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Recipe lookup or validation error.
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Tag lookup error.
    #[error(transparent)]
    TagError(#[from] TagError),
    /// Shopping cart membership error.
    #[error(transparent)]
    CartError(#[from] CartError),
    /// Favorite membership error.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Subscription error.
    #[error(transparent)]
    SubscriptionError(#[from] SubscriptionError),
    /// Short code generation or resolution error.
    #[error(transparent)]
    ShortCodeError(#[from] ShortCodeError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating broken data integrity or a bug.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// IO error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mapping; everything else is an internal server
/// error (500) which is logged.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::TagError(err) => err.into_response(),
            Self::CartError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::SubscriptionError(err) => err.into_response(),
            Self::ShortCodeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Returns true when the database rejected a write because of a unique or primary key
/// constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
