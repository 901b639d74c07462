use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use recipebox::{
    model::recipe::{IngredientAmountDto, RecipeListParams, RecipeWriteDto},
    server::{
        controller::{
            recipe::{
                create_recipe, delete_recipe, get_link, get_recipe, list_recipes, update_recipe,
            },
            short_link::redirect_short_link,
        },
        model::session::user::SessionUserId,
        service::short_code::ShortCodeStrategy,
    },
};

use super::*;

fn host_headers(host: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static(host));
    headers
}

fn create_dto(ingredient_id: i32, tag_id: i32) -> RecipeWriteDto {
    RecipeWriteDto {
        name: "Bread".to_string(),
        text: "Knead and bake".to_string(),
        cooking_time: 60,
        ingredients: vec![IngredientAmountDto {
            id: ingredient_id,
            amount: 500,
        }],
        tags: vec![tag_id],
    }
}

mod create_recipe {
    use super::*;

    /// Expect 201 for a valid recipe from a logged in user
    #[tokio::test]
    async fn creates_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let flour = test.insert_mock_ingredient("Flour", "g").await?;
        let tag = test.insert_mock_tag("Baking", "baking").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Json(create_dto(flour.id, tag.id)),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 400 for an ingredient that does not exist
    #[tokio::test]
    async fn returns_bad_request_for_unknown_ingredient() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Json(create_dto(1, 1)),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 without a user in session
    #[tokio::test]
    async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let result = create_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Json(create_dto(1, 1)),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod get_recipe {
    use super::*;

    /// Expect 200 for an anonymous request
    #[tokio::test]
    async fn returns_recipe_to_anonymous_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;

        let result = get_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 404 for a recipe that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let result = get_recipe(State(test.into_app_state()), test.session.clone(), Path(1)).await;

        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod list_recipes {
    use super::*;

    /// Expect only the author's recipes carrying the tag
    #[tokio::test]
    async fn filters_by_author_and_tag() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let alice = test.insert_mock_user("alice").await?;
        let bob = test.insert_mock_user("bob").await?;
        let lunch = test.insert_mock_tag("Lunch", "lunch").await?;
        let bread = test.insert_mock_recipe(alice.id, "Bread", &[]).await?;
        test.insert_mock_recipe(alice.id, "Soup", &[]).await?;
        let pie = test.insert_mock_recipe(bob.id, "Pie", &[]).await?;
        test.insert_recipe_tag(bread.id, lunch.id).await?;
        test.insert_recipe_tag(pie.id, lunch.id).await?;

        let params = RecipeListParams {
            author: Some(alice.id),
            tags: Some("lunch,dinner".to_string()),
            ..Default::default()
        };
        let result = list_recipes(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "Bread");
        assert_eq!(body[0]["tags"][0]["slug"], "lunch");

        Ok(())
    }

    /// Expect an empty list for an anonymous request filtering on favorites
    #[tokio::test]
    async fn returns_empty_favorites_to_anonymous_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        test.insert_mock_recipe(user.id, "Bread", &[]).await?;

        let params = RecipeListParams {
            is_favorited: Some(1),
            ..Default::default()
        };
        let result = list_recipes(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "[]");

        Ok(())
    }

    /// Expect 400 for a flag other than 0 or 1
    #[tokio::test]
    async fn returns_bad_request_for_invalid_flag() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let params = RecipeListParams {
            is_in_shopping_cart: Some(2),
            ..Default::default()
        };
        let result = list_recipes(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_recipe {
    use super::*;

    /// Expect 200 and the same short link after the author updates the recipe
    #[tokio::test]
    async fn author_updates_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let flour = test.insert_mock_ingredient("Flour", "g").await?;
        let tag = test.insert_mock_tag("Baking", "baking").await?;
        let recipe = test
            .insert_mock_recipe_with_short_code(user.id, "Old bread", Some("AbCdEfGh"), &[])
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state = test.into_app_state();

        let result = update_recipe(
            State(state.clone()),
            test.session.clone(),
            Path(recipe.id),
            Json(create_dto(flour.id, tag.id)),
        )
        .await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
        assert_eq!(body["name"], "Bread");
        assert_eq!(body["ingredients"][0]["amount"], 500);

        let link = get_link(State(state), host_headers("recipes.test"), Path(recipe.id))
            .await
            .into_response();
        let link: serde_json::Value = serde_json::from_str(&body_string(link).await)?;
        assert_eq!(link["short-link"], "http://recipes.test/s/AbCdEfGh/");

        Ok(())
    }

    /// Expect 403 when another user updates the recipe
    #[tokio::test]
    async fn returns_forbidden_for_other_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let author = test.insert_mock_user("alice").await?;
        let other = test.insert_mock_user("bob").await?;
        let flour = test.insert_mock_ingredient("Flour", "g").await?;
        let tag = test.insert_mock_tag("Baking", "baking").await?;
        let recipe = test.insert_mock_recipe(author.id, "Bread", &[]).await?;
        SessionUserId::insert(&test.session, other.id).await.unwrap();

        let result = update_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
            Json(create_dto(flour.id, tag.id)),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let result = update_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Path(1),
            Json(create_dto(1, 1)),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod delete_recipe {
    use super::*;

    /// Expect 204 when the author deletes the recipe
    #[tokio::test]
    async fn author_deletes_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = delete_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    /// Expect 403 when someone other than the author deletes the recipe
    #[tokio::test]
    async fn returns_forbidden_for_other_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let author = test.insert_mock_user("alice").await?;
        let other = test.insert_mock_user("bob").await?;
        let recipe = test.insert_mock_recipe(author.id, "Bread", &[]).await?;
        SessionUserId::insert(&test.session, other.id).await.unwrap();

        let result = delete_recipe(
            State(test.into_app_state()),
            test.session.clone(),
            Path(recipe.id),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod get_link {
    use super::*;

    /// Expect the absolute link built from the Host header
    #[tokio::test]
    async fn returns_short_link() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test
            .insert_mock_recipe_with_short_code(user.id, "Bread", Some("aB3dE6gH"), &[])
            .await?;

        let result = get_link(
            State(test.into_app_state()),
            host_headers("recipes.test"),
            Path(recipe.id),
        )
        .await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_string(resp).await,
            r#"{"short-link":"http://recipes.test/s/aB3dE6gH/"}"#
        );

        Ok(())
    }

    /// Expect https links when running behind a TLS terminating proxy
    #[tokio::test]
    async fn returns_https_link_behind_secure_proxy() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;

        let state = test.into_app_state_with(ShortCodeStrategy::Encoded, true);
        let result = get_link(State(state), host_headers("recipes.test"), Path(recipe.id)).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_string(resp).await,
            r#"{"short-link":"https://recipes.test/s/1/"}"#
        );

        Ok(())
    }

    /// Expect 404 for a recipe that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_recipe() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let result = get_link(
            State(test.into_app_state()),
            host_headers("recipes.test"),
            Path(1),
        )
        .await;

        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect the code of a freshly created recipe to resolve back to it
    #[tokio::test]
    async fn created_recipe_link_round_trips() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user = test.insert_mock_user("alice").await?;
        let flour = test.insert_mock_ingredient("Flour", "g").await?;
        let tag = test.insert_mock_tag("Baking", "baking").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        for strategy in [ShortCodeStrategy::Random, ShortCodeStrategy::Encoded] {
            let state = test.into_app_state_with(strategy, false);

            let created = create_recipe(
                State(state.clone()),
                test.session.clone(),
                Json(create_dto(flour.id, tag.id)),
            )
            .await
            .into_response();
            let recipe: serde_json::Value = serde_json::from_str(&body_string(created).await)?;
            let recipe_id = recipe["id"].as_i64().unwrap();

            let link = get_link(
                State(state.clone()),
                host_headers("recipes.test"),
                Path(recipe_id as i32),
            )
            .await
            .into_response();
            let link: serde_json::Value = serde_json::from_str(&body_string(link).await)?;
            let code = link["short-link"]
                .as_str()
                .unwrap()
                .trim_start_matches("http://recipes.test/s/")
                .trim_end_matches('/')
                .to_string();

            let resp = redirect_short_link(State(state), Path(code))
                .await
                .into_response();
            assert_eq!(
                resp.headers()[header::LOCATION],
                format!("/recipes/{}/", recipe_id).as_str()
            );
        }

        Ok(())
    }
}
