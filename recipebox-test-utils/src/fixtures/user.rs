use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert a user with the provided username
    pub async fn insert_mock_user(
        &self,
        username: &str,
    ) -> Result<entity::recipebox_user::Model, TestError> {
        Ok(
            entity::prelude::RecipeboxUser::insert(entity::recipebox_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a subscription of `user_from_id` to `user_to_id`
    pub async fn insert_subscription(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> Result<entity::subscription::Model, TestError> {
        Ok(
            entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
                user_from_id: ActiveValue::Set(user_from_id),
                user_to_id: ActiveValue::Set(user_to_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}
