use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::favorite::CreateFavoriteDto, server::model::db::FavoriteModel};

/// Queries for the `favorite` table
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite
    ///
    /// Referenced rows are not checked beforehand, a missing user, character or planet
    /// surfaces as a foreign key error from the database.
    pub async fn create(&self, favorite: CreateFavoriteDto) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(favorite.user_id),
            character_id: ActiveValue::Set(favorite.character_id),
            planet_id: ActiveValue::Set(favorite.planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets the favorites of a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
