use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use recipebox::server::{
    controller::shopping_cart::{
        add_to_shopping_cart, download_shopping_cart, remove_from_shopping_cart,
    },
    model::session::user::SessionUserId,
};

use super::*;

mod download_shopping_cart {
    use super::*;

    /// Expect 200 with the aggregated plaintext attachment
    #[tokio::test]
    async fn returns_aggregated_list() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let flour = test.insert_mock_ingredient("Flour", "g").await?;
        let sugar = test.insert_mock_ingredient("Sugar", "g").await?;
        let bread = test
            .insert_mock_recipe(user.id, "Bread", &[(flour.id, 200)])
            .await?;
        let cake = test
            .insert_mock_recipe(user.id, "Cake", &[(flour.id, 300), (sugar.id, 50)])
            .await?;
        test.insert_cart_entry(user.id, bread.id).await?;
        test.insert_cart_entry(user.id, cake.id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"shopping_cart.txt\""
        );
        assert_eq!(
            body_string(resp).await,
            "Полный список ингредиентов:\nFlour (g) — 500;\nSugar (g) — 50."
        );

        Ok(())
    }

    /// Expect the header and a lone period for an empty cart
    #[tokio::test]
    async fn returns_header_for_empty_cart() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Полный список ингредиентов:\n.");

        Ok(())
    }

    /// Expect 401 when no user is in session
    #[tokio::test]
    async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let result =
            download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 and a cleared session when the session user no longer exists
    #[tokio::test]
    async fn clears_session_of_deleted_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        SessionUserId::insert(&test.session, 42).await.unwrap();

        let result =
            download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 500 when required database tables don't exist
    #[tokio::test]
    async fn returns_internal_error_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result =
            download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod add_to_shopping_cart {
    use super::*;

    /// Expect 201 when adding a recipe, then 400 on the duplicate add
    #[tokio::test]
    async fn rejects_duplicate_add() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let first = add_to_shopping_cart(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;
        let second = add_to_shopping_cart(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(first.into_response().status(), StatusCode::CREATED);
        assert_eq!(second.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 for a recipe that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            add_to_shopping_cart(State(test.into_app_state()), test.session.clone(), Path(1))
                .await;

        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod remove_from_shopping_cart {
    use super::*;

    /// Expect 204 when removing a recipe in the cart
    #[tokio::test]
    async fn removes_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
        test.insert_cart_entry(user.id, recipe.id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = remove_from_shopping_cart(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    /// Expect 404 when the recipe is not in the cart
    #[tokio::test]
    async fn returns_not_found_when_not_in_cart() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = remove_from_shopping_cart(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
