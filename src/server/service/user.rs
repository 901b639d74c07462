use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.map(|user| UserDto {
            id: user.id,
            username: user.username,
        }))
    }
}

#[cfg(test)]
mod tests {
    use recipebox_test_utils::prelude::*;

    use crate::server::{error::Error, service::user::UserService};

    /// Expect Ok with Some for an existing user
    #[tokio::test]
    async fn returns_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;
        let user_model = test.insert_mock_user("alice").await?;

        let user_service = UserService::new(&test.state.db);
        let result = user_service.get_user(user_model.id).await;

        assert!(matches!(result, Ok(Some(user)) if user.username == "alice"));

        Ok(())
    }

    /// Expect Ok with None for user ID that does not exist
    #[tokio::test]
    async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_recipe_tables!()?;

        let user_service = UserService::new(&test.state.db);
        let result = user_service.get_user(1).await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }

    /// Expect Error when required tables are not present
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let user_service = UserService::new(&test.state.db);
        let result = user_service.get_user(1).await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
