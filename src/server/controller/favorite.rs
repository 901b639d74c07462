use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, recipe::ShortRecipeDto},
    server::{
        controller::util::get_user::get_user_id_from_session, error::Error,
        model::app::AppState, service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a recipe to the logged in user's favorites
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to favorites", body = ShortRecipeDto),
        (status = 400, description = "Recipe is already a favorite", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let recipe = FavoriteService::new(&state.db)
        .add(user_id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Remove a recipe from the logged in user's favorites
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from favorites"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found or not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    FavoriteService::new(&state.db)
        .remove(user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
