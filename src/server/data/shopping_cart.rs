use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::ShoppingCartModel;

pub struct ShoppingCartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingCartRepository<'a, C> {
    /// Creates a new instance of [`ShoppingCartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's cart
    ///
    /// Fails with a unique constraint violation when the recipe is already in the cart.
    pub async fn create(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<ShoppingCartModel, DbErr> {
        entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::ShoppingCart::find_by_id((user_id, recipe_id))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Get the IDs of every recipe in the user's cart, ordered by recipe ID
    pub async fn get_recipe_ids_by_user_id(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ShoppingCart::find()
            .select_only()
            .column(entity::shopping_cart::Column::RecipeId)
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::shopping_cart::Column::RecipeId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Removes a recipe from the user's cart
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShoppingCart::delete_by_id((user_id, recipe_id))
            .exec(self.db)
            .await
    }
}
