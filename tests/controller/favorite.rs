use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox::server::{
    controller::favorite::{add_favorite, remove_favorite},
    model::session::user::SessionUserId,
};

use super::*;

/// Expect 201 when favoriting, 400 on the duplicate and 204 on removal
#[tokio::test]
async fn favorite_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let added = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(recipe.id),
    )
    .await;
    let duplicate = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(recipe.id),
    )
    .await;
    let removed = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(recipe.id),
    )
    .await;

    assert_eq!(added.into_response().status(), StatusCode::CREATED);
    assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(removed.into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 when removing a recipe that is not a favorite
#[tokio::test]
async fn returns_not_found_for_missing_favorite() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(recipe.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without a user in session
#[tokio::test]
async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;

    let result = add_favorite(State(test.into_app_state()), test.session.clone(), Path(1)).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
