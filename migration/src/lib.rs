pub use sea_orm_migration::prelude::*;

mod m20261019_000001_recipebox_user;
mod m20261019_000002_ingredient;
mod m20261019_000003_recipe;
mod m20261019_000004_recipe_ingredient;
mod m20261019_000005_shopping_cart;
mod m20261019_000006_favorite;
mod m20261019_000007_subscription;
mod m20261019_000008_tag;
mod m20261019_000009_recipe_tag;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_recipebox_user::Migration),
            Box::new(m20261019_000002_ingredient::Migration),
            Box::new(m20261019_000003_recipe::Migration),
            Box::new(m20261019_000004_recipe_ingredient::Migration),
            Box::new(m20261019_000005_shopping_cart::Migration),
            Box::new(m20261019_000006_favorite::Migration),
            Box::new(m20261019_000007_subscription::Migration),
            Box::new(m20261019_000008_tag::Migration),
            Box::new(m20261019_000009_recipe_tag::Migration),
        ]
    }
}
