use super::*;

/// Expect Ok when removing a recipe that is in the cart
#[tokio::test]
async fn removes_recipe() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
    test.insert_cart_entry(user.id, recipe.id).await?;

    let cart_service = ShoppingCartService::new(&test.state.db);
    let result = cart_service.remove(user.id, recipe.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect NotInCart rather than silent success when the recipe is not in the cart
#[tokio::test]
async fn fails_when_not_in_cart() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;

    let cart_service = ShoppingCartService::new(&test.state.db);
    let result = cart_service.remove(user.id, recipe.id).await;

    assert!(matches!(
        result,
        Err(Error::CartError(CartError::NotInCart { recipe_id })) if recipe_id == recipe.id
    ));

    Ok(())
}

/// Expect a second remove to fail after the first succeeded
#[tokio::test]
async fn fails_on_second_remove() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;
    let recipe = test.insert_mock_recipe(user.id, "Bread", &[]).await?;
    test.insert_cart_entry(user.id, recipe.id).await?;

    let cart_service = ShoppingCartService::new(&test.state.db);
    cart_service.remove(user.id, recipe.id).await.unwrap();
    let result = cart_service.remove(user.id, recipe.id).await;

    assert!(matches!(
        result,
        Err(Error::CartError(CartError::NotInCart { .. }))
    ));

    Ok(())
}

/// Expect NotFound when the recipe does not exist
#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let user = test.insert_mock_user("alice").await?;

    let cart_service = ShoppingCartService::new(&test.state.db);
    let result = cart_service.remove(user.id, 1).await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotFound(1)))
    ));

    Ok(())
}
