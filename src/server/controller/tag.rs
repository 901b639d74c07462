use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, tag::TagDto},
    server::{error::Error, model::app::AppState, service::tag::TagService},
};

pub static TAG_TAG: &str = "tag";

/// List every tag
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Tags ordered by name", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tags = TagService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(tags)))
}

/// Get a tag
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag found", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tag = TagService::new(&state.db).get(tag_id).await?;

    Ok((StatusCode::OK, Json(tag)))
}
