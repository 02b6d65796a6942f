use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::double_option;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<entity::sea_orm_active_enums::Gender> for Gender {
    fn from(gender: entity::sea_orm_active_enums::Gender) -> Self {
        use entity::sea_orm_active_enums::Gender as Db;

        match gender {
            Db::Male => Self::Male,
            Db::Female => Self::Female,
            Db::Other => Self::Other,
        }
    }
}

impl From<Gender> for entity::sea_orm_active_enums::Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
            Gender::Other => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Gender,
    pub species: String,
    pub height: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
            gender: character.gender.into(),
            species: character.species,
            height: character.height,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    pub gender: Gender,
    #[validate(length(min = 1))]
    pub species: String,
    #[validate(length(min = 1))]
    pub height: String,
}

/// Partial character update
///
/// Absent keys leave the column unchanged, `null` clears `hair_color`/`eye_color`.
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateCharacterDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Gender>)]
    pub gender: Option<Option<Gender>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub species: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub height: Option<Option<String>>,
}
