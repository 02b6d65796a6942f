use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::favorite::CreateFavoriteDto,
    server::{
        data::favorite::FavoriteRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for user favorites
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a favorite and returns its ID
    ///
    /// References are not checked up front; a missing user, character or planet fails at
    /// the foreign key and is returned as [`Error::DbErr`].
    pub async fn create_favorite(&self, favorite: CreateFavoriteDto) -> Result<i32, Error> {
        favorite.validate()?;

        let favorite_repository = FavoriteRepository::new(self.db);

        let favorite = favorite_repository.create(favorite).await?;

        Ok(favorite.id)
    }

    /// Deletes a favorite, [`ApiError::NotFound`] if it does not exist
    pub async fn delete_favorite(&self, favorite_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let result = favorite_repository.delete(favorite_id).await?;

        if result.rows_affected == 0 {
            return Err(ApiError::NotFound("Favorite not found".to_string()).into());
        }

        Ok(())
    }
}
