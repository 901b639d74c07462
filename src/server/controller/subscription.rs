use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SubscriptionDto, SubscriptionListParams, UserDto},
    },
    server::{
        controller::util::get_user::get_user_id_from_session, error::Error,
        model::app::AppState, service::subscription::SubscriptionService,
    },
};

pub static SUBSCRIPTION_TAG: &str = "subscription";

/// List the users followed by the logged in user with their newest recipes
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = SUBSCRIPTION_TAG,
    params(SubscriptionListParams),
    responses(
        (status = 200, description = "Followed users", body = Vec<SubscriptionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubscriptionListParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let subscriptions = SubscriptionService::new(&state.db)
        .list_subscriptions(user_id, params.recipes_limit)
        .await?;

    Ok((StatusCode::OK, Json(subscriptions)))
}

/// Subscribe the logged in user to another user
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "ID of the user to subscribe to")),
    responses(
        (status = 201, description = "Subscribed", body = UserDto),
        (status = 400, description = "Already subscribed or subscribing to oneself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let author = SubscriptionService::new(&state.db)
        .subscribe(user_id, author_id)
        .await?;

    Ok((StatusCode::CREATED, Json(author)))
}

/// Unsubscribe the logged in user from another user
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "ID of the user to unsubscribe from")),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found or not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    SubscriptionService::new(&state.db)
        .unsubscribe(user_id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
