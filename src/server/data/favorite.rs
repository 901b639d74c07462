use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::FavoriteModel;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a recipe as a favorite of the user
    ///
    /// Fails with a unique constraint violation when the recipe is already a favorite.
    pub async fn create(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Favorite::find_by_id((user_id, recipe_id))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Get the IDs of every recipe the user marked as a favorite, ordered by recipe ID
    pub async fn get_recipe_ids_by_user_id(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Favorite::find()
            .select_only()
            .column(entity::favorite::Column::RecipeId)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::RecipeId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Removes a recipe from the user's favorites
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether an entry existed.
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id((user_id, recipe_id))
            .exec(self.db)
            .await
    }
}
