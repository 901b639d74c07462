use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipebox_user::Entity",
        from = "Column::UserFromId",
        to = "super::recipebox_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UserFrom,
    #[sea_orm(
        belongs_to = "super::recipebox_user::Entity",
        from = "Column::UserToId",
        to = "super::recipebox_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UserTo,
}

impl ActiveModelBehavior for ActiveModel {}
