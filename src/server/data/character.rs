use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use entity::sea_orm_active_enums::Gender;

use crate::{model::character::CreateCharacterDto, server::model::db::CharacterModel};

/// Validated column changes for a partial character update
///
/// `None` leaves a column untouched. The nullable colors use a nested option so `Some(None)`
/// clears them.
#[derive(Default)]
pub struct CharacterChanges {
    /// New unique name
    pub name: Option<String>,
    /// New hair color, `Some(None)` clears it
    pub hair_color: Option<Option<String>>,
    /// New eye color, `Some(None)` clears it
    pub eye_color: Option<Option<String>>,
    /// New gender
    pub gender: Option<Gender>,
    /// New species
    pub species: Option<String>,
    /// New height
    pub height: Option<String>,
}

/// Queries for the `character` table
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character
    pub async fn create(&self, character: CreateCharacterDto) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            hair_color: ActiveValue::Set(character.hair_color),
            eye_color: ActiveValue::Set(character.eye_color),
            gender: ActiveValue::Set(character.gender.into()),
            species: ActiveValue::Set(character.species),
            height: ActiveValue::Set(character.height),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets a character by ID, `Ok(None)` if it does not exist
    pub async fn get(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets all characters ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to an existing character
    ///
    /// Returns `Ok(None)` if the character does not exist. When no change is provided the
    /// stored character is returned without issuing an update.
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.clone().into_active_model();

        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(hair_color) = changes.hair_color {
            character_am.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(eye_color) = changes.eye_color {
            character_am.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(gender) = changes.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(species) = changes.species {
            character_am.species = ActiveValue::Set(species);
        }
        if let Some(height) = changes.height {
            character_am.height = ActiveValue::Set(height);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of character existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
