use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox::server::controller::tag::{get_tag, list_tags};

use super::*;

/// Expect every tag ordered by name
#[tokio::test]
async fn lists_tags_by_name() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    test.insert_mock_tag("Lunch", "lunch").await?;
    test.insert_mock_tag("Breakfast", "breakfast").await?;

    let result = list_tags(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["slug"], "breakfast");
    assert_eq!(body[1]["name"], "Lunch");

    Ok(())
}

/// Expect 200 for an existing tag and 404 for an unknown one
#[tokio::test]
async fn gets_tag_by_id() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let tag = test.insert_mock_tag("Dinner", "dinner").await?;

    let found = get_tag(State(test.into_app_state()), Path(tag.id)).await;
    let missing = get_tag(State(test.into_app_state()), Path(tag.id + 1)).await;

    assert_eq!(found.into_response().status(), StatusCode::OK);
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
