use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState, service::short_code::ShortCodeService},
};

pub static SHORT_LINK_TAG: &str = "short link";

/// Resolve a recipe short code
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the recipe page `/recipes/{id}/`
/// - 404 (Not Found): Code is malformed or names no recipe
#[utoipa::path(
    get,
    path = "/s/{code}/",
    tag = SHORT_LINK_TAG,
    params(("code" = String, Path, description = "Recipe short code")),
    responses(
        (status = 307, description = "Redirect to the recipe page"),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn redirect_short_link(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let recipe_id = ShortCodeService::new(&state.db, state.short_code_strategy)
        .resolve(&code)
        .await?;

    Ok(Redirect::temporary(&format!("/recipes/{}/", recipe_id)))
}
