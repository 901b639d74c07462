use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, recipe::ShortRecipeDto},
    server::{
        controller::util::get_user::get_user_id_from_session,
        error::Error,
        model::{app::AppState, shopping_list::SHOPPING_LIST_FILE_NAME},
        service::shopping_cart::ShoppingCartService,
    },
};

pub static SHOPPING_CART_TAG: &str = "shopping cart";

/// Add a recipe to the logged in user's shopping cart
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = SHOPPING_CART_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to the shopping cart", body = ShortRecipeDto),
        (status = 400, description = "Recipe is already in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let recipe = ShoppingCartService::new(&state.db)
        .add(user_id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Remove a recipe from the logged in user's shopping cart
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = SHOPPING_CART_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from the shopping cart"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in the shopping cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    ShoppingCartService::new(&state.db)
        .remove(user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the aggregated ingredient list of the shopping cart as plain text
///
/// Ingredients shared between recipes are summed into one line.
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = SHOPPING_CART_TAG,
    responses(
        (status = 200, description = "Shopping list attachment", body = String, content_type = "text/plain"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let shopping_list = ShoppingCartService::new(&state.db)
        .aggregate(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILE_NAME),
            ),
        ],
        shopping_list.render(),
    ))
}
