use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox::{
    model::ingredient::IngredientSearchParams, server::controller::ingredient::search_ingredients,
};

use super::*;

/// Expect only ingredients starting with the prefix
#[tokio::test]
async fn filters_by_name_prefix() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    test.insert_mock_ingredient("Flour", "g").await?;
    test.insert_mock_ingredient("Sugar", "g").await?;

    let params = IngredientSearchParams {
        name: Some("Fl".to_string()),
    };
    let result = search_ingredients(State(test.into_app_state()), Query(params)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["name"], "Flour");

    Ok(())
}

/// Expect a lower case prefix to match a capitalised Cyrillic name
#[tokio::test]
async fn matches_cyrillic_prefix_ignoring_case() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    test.insert_mock_ingredient("Мука", "г").await?;
    test.insert_mock_ingredient("Молоко", "мл").await?;

    let params = IngredientSearchParams {
        name: Some("мук".to_string()),
    };
    let result = search_ingredients(State(test.into_app_state()), Query(params)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["name"], "Мука");

    Ok(())
}
