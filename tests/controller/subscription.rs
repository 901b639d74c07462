use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox::{
    model::user::SubscriptionListParams,
    server::{
        controller::subscription::{list_subscriptions, subscribe, unsubscribe},
        model::session::user::SessionUserId,
    },
};

use super::*;

/// Expect 201 when subscribing and 204 when unsubscribing
#[tokio::test]
async fn subscribes_and_unsubscribes() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.insert_mock_user("alice").await?;
    let bob = test.insert_mock_user("bob").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let subscribed = subscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
    )
    .await;
    let unsubscribed = unsubscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
    )
    .await;

    assert_eq!(subscribed.into_response().status(), StatusCode::CREATED);
    assert_eq!(unsubscribed.into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 400 when subscribing to oneself
#[tokio::test]
async fn returns_bad_request_for_self_subscription() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.insert_mock_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = subscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(alice.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when unsubscribing without a subscription
#[tokio::test]
async fn returns_not_found_when_not_subscribed() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.insert_mock_user("alice").await?;
    let bob = test.insert_mock_user("bob").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = unsubscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect followed users with recipe previews cut to the requested limit
#[tokio::test]
async fn lists_subscriptions_with_recipes_limit() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.insert_mock_user("alice").await?;
    let bob = test.insert_mock_user("bob").await?;
    test.insert_subscription(alice.id, bob.id).await?;
    test.insert_mock_recipe(bob.id, "Bread", &[]).await?;
    test.insert_mock_recipe(bob.id, "Soup", &[]).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let params = SubscriptionListParams {
        recipes_limit: Some(1),
    };
    let result = list_subscriptions(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body[0]["username"], "bob");
    assert_eq!(body[0]["is_subscribed"], true);
    assert_eq!(body[0]["recipes"].as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["recipes_count"], 2);

    Ok(())
}

/// Expect 401 when listing subscriptions without a logged in user
#[tokio::test]
async fn returns_unauthorized_for_anonymous_subscriptions() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;

    let result = list_subscriptions(
        State(test.into_app_state()),
        test.session.clone(),
        Query(SubscriptionListParams::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
