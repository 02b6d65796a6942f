use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for user accounts
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user without credentials
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let users = user_repository.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Registers a new active user
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created user
    /// - `Err(Error::ApiError(ApiError::Validation))` - A field is empty
    /// - `Err(Error::ApiError(ApiError::Conflict))` - Email or username already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<i32, Error> {
        user.validate()?;

        let user_repository = UserRepository::new(self.db);

        if user_repository.find_by_email(&user.email).await?.is_some() {
            return Err(ApiError::Conflict("Email is already registered".to_string()).into());
        }

        let user = user_repository
            .create(user.username, user.email, user.password)
            .await
            .map_err(|e| Error::conflict_on_unique(e, "Username or email is already registered"))?;

        Ok(user.id)
    }
}
