use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        recipe::ShortRecipeDto,
        user::{SubscriptionDto, UserDto},
    },
    server::{
        data::{
            recipe::RecipeRepository, subscription::SubscriptionRepository,
            user::UserRepository,
        },
        error::{is_unique_violation, subscription::SubscriptionError, Error},
    },
};

/// Recipes previewed per followed user when the request sets no limit
pub const DEFAULT_RECIPES_LIMIT: usize = 3;

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    /// Creates a new instance of [`SubscriptionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_from_id` to the recipes of `user_to_id`.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The followed user
    /// - `Err(Error::SubscriptionError(SelfSubscription))` - Both IDs are the same user
    /// - `Err(Error::SubscriptionError(UserNotFound))` - The followed user does not exist
    /// - `Err(Error::SubscriptionError(DuplicateEntry))` - Already subscribed
    pub async fn subscribe(&self, user_from_id: i32, user_to_id: i32) -> Result<UserDto, Error> {
        if user_from_id == user_to_id {
            return Err(SubscriptionError::SelfSubscription(user_from_id).into());
        }

        let user_to = UserRepository::new(self.db)
            .find_by_id(user_to_id)
            .await?
            .ok_or(SubscriptionError::UserNotFound(user_to_id))?;

        match SubscriptionRepository::new(self.db)
            .create(user_from_id, user_to_id)
            .await
        {
            Ok(_) => Ok(UserDto {
                id: user_to.id,
                username: user_to.username,
            }),
            Err(err) if is_unique_violation(&err) => Err(SubscriptionError::DuplicateEntry {
                user_from_id,
                user_to_id,
            }
            .into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists the users followed by `user_id` with their newest recipes.
    ///
    /// At most `recipes_limit` recipes are previewed per user, [`DEFAULT_RECIPES_LIMIT`] when
    /// unset; `recipes_count` always counts every recipe of the user.
    pub async fn list_subscriptions(
        &self,
        user_id: i32,
        recipes_limit: Option<usize>,
    ) -> Result<Vec<SubscriptionDto>, Error> {
        let recipes_limit = recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT);

        let followed = SubscriptionRepository::new(self.db)
            .get_followed_users(user_id)
            .await?;
        let author_ids: Vec<i32> = followed.iter().map(|user| user.id).collect();

        let mut recipes_by_author: HashMap<i32, Vec<ShortRecipeDto>> = HashMap::new();
        for recipe in RecipeRepository::new(self.db)
            .find_by_author_ids(&author_ids)
            .await?
        {
            recipes_by_author
                .entry(recipe.author_id)
                .or_default()
                .push(ShortRecipeDto {
                    id: recipe.id,
                    name: recipe.name,
                    cooking_time: recipe.cooking_time,
                });
        }

        Ok(followed
            .into_iter()
            .map(|user| {
                let mut recipes = recipes_by_author.remove(&user.id).unwrap_or_default();
                let recipes_count = recipes.len() as u64;
                recipes.truncate(recipes_limit);

                SubscriptionDto {
                    id: user.id,
                    username: user.username,
                    is_subscribed: true,
                    recipes,
                    recipes_count,
                }
            })
            .collect())
    }

    /// Removes the subscription of `user_from_id` to `user_to_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(Error::SubscriptionError(UserNotFound))` - The followed user does not exist
    /// - `Err(Error::SubscriptionError(NotSubscribed))` - No such subscription
    pub async fn unsubscribe(&self, user_from_id: i32, user_to_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db)
            .find_by_id(user_to_id)
            .await?
            .is_none()
        {
            return Err(SubscriptionError::UserNotFound(user_to_id).into());
        }

        let result = SubscriptionRepository::new(self.db)
            .delete(user_from_id, user_to_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(SubscriptionError::NotSubscribed {
                user_from_id,
                user_to_id,
            }
            .into());
        }

        Ok(())
    }
}
