use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{SubscriptionModel, UserModel};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Subscribes `user_from_id` to `user_to_id`
    pub async fn create(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> Result<SubscriptionModel, DbErr> {
        entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            user_from_id: ActiveValue::Set(user_from_id),
            user_to_id: ActiveValue::Set(user_to_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn exists(&self, user_from_id: i32, user_to_id: i32) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::Subscription::find_by_id((user_from_id, user_to_id))
                .one(self.db)
                .await?
                .is_some(),
        )
    }

    /// Get the users followed by `user_from_id`, ordered by username
    pub async fn get_followed_users(&self, user_from_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::RecipeboxUser::find()
            .filter(
                entity::recipebox_user::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::subscription::Column::UserToId)
                        .from(entity::prelude::Subscription)
                        .and_where(entity::subscription::Column::UserFromId.eq(user_from_id))
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::recipebox_user::Column::Username)
            .all(self.db)
            .await
    }

    /// Check [`DeleteResult::rows_affected`] to know whether a subscription existed.
    pub async fn delete(&self, user_from_id: i32, user_to_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscription::delete_by_id((user_from_id, user_to_id))
            .exec(self.db)
            .await
    }
}
