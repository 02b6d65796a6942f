use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::character::{CharacterChanges, CharacterRepository},
        error::{api::ApiError, Error},
        service::RequiredChanges,
    },
};

fn not_found() -> Error {
    ApiError::NotFound("Character not found".to_string()).into()
}

/// Service for characters
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character ordered by ID
    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repository = CharacterRepository::new(self.db);

        let characters = character_repository.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Gets a character, [`ApiError::NotFound`] if it does not exist
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repository = CharacterRepository::new(self.db);

        match character_repository.get(character_id).await? {
            Some(character) => Ok(character.into()),
            None => Err(not_found()),
        }
    }

    /// Creates a character and returns its ID
    pub async fn create_character(&self, character: CreateCharacterDto) -> Result<i32, Error> {
        character.validate()?;

        let character_repository = CharacterRepository::new(self.db);

        let character = character_repository
            .create(character)
            .await
            .map_err(|e| Error::conflict_on_unique(e, "Character name already exists"))?;

        Ok(character.id)
    }

    /// Applies a partial update to a character
    ///
    /// `name`, `gender`, `species` and `height` may be omitted but not set to `null` or an
    /// empty string. `hair_color` and `eye_color` are cleared by `null`.
    pub async fn update_character(
        &self,
        character_id: i32,
        character: UpdateCharacterDto,
    ) -> Result<(), Error> {
        let mut required = RequiredChanges::default();

        let changes = CharacterChanges {
            name: required.string("name", character.name),
            hair_color: character.hair_color,
            eye_color: character.eye_color,
            gender: required.value("gender", character.gender).map(Into::into),
            species: required.string("species", character.species),
            height: required.string("height", character.height),
        };

        required.finish()?;

        let character_repository = CharacterRepository::new(self.db);

        character_repository
            .update(character_id, changes)
            .await
            .map_err(|e| Error::conflict_on_unique(e, "Character name already exists"))?
            .ok_or_else(not_found)?;

        Ok(())
    }

    /// Deletes a character, [`ApiError::NotFound`] if it does not exist
    pub async fn delete_character(&self, character_id: i32) -> Result<(), Error> {
        let character_repository = CharacterRepository::new(self.db);

        let result = character_repository.delete(character_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}
