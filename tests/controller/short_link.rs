use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use recipebox::server::{
    controller::short_link::redirect_short_link, service::short_code::ShortCodeStrategy,
};

use super::*;

/// Expect a 307 redirect to the recipe page for a stored random code
#[tokio::test]
async fn redirects_random_code() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test
        .insert_mock_recipe_with_short_code(user.id, "Bread", Some("aB3dE6gH"), &[])
        .await?;

    let result =
        redirect_short_link(State(test.into_app_state()), Path("aB3dE6gH".to_string())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers()[header::LOCATION],
        format!("/recipes/{}/", recipe.id).as_str()
    );

    Ok(())
}

/// Expect a 307 redirect for an encoded recipe ID
#[tokio::test]
async fn redirects_encoded_code() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    test.insert_mock_recipe(user.id, "Bread", &[]).await?;

    let state = test.into_app_state_with(ShortCodeStrategy::Encoded, false);
    let result = redirect_short_link(State(state), Path("1".to_string())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/recipes/1/");

    Ok(())
}

/// Expect 404 rather than 500 for a malformed code
#[tokio::test]
async fn returns_not_found_for_malformed_code() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;

    for strategy in [ShortCodeStrategy::Random, ShortCodeStrategy::Encoded] {
        let state = test.into_app_state_with(strategy, false);
        let result = redirect_short_link(State(state), Path("!!!".to_string())).await;

        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);
    }

    Ok(())
}

/// Expect 404 for a well formed code that names no recipe
#[tokio::test]
async fn returns_not_found_for_unknown_code() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;

    let result =
        redirect_short_link(State(test.into_app_state()), Path("zzzzzzzz".to_string())).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
