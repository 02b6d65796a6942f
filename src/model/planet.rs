use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::double_option;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            terrain: planet.terrain,
            population: planet.population,
            climate: planet.climate,
            gravity: planet.gravity,
        }
    }
}

/// All fields are required, any integer population is accepted including `0`
#[derive(Clone, Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub terrain: String,
    pub population: i64,
    #[validate(length(min = 1))]
    pub climate: String,
    #[validate(length(min = 1))]
    pub gravity: String,
}

/// Partial planet update
///
/// Absent keys leave the column unchanged, `null` clears every column except `name`.
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanetDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub terrain: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub gravity: Option<Option<String>>,
}
