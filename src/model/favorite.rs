use serde::Deserialize;
use validator::{Validate, ValidationError};

/// A favorite must point at a character, a planet, or both
#[derive(Clone, Debug, Deserialize, Validate, utoipa::ToSchema)]
#[validate(schema(function = "validate_favorite_target"))]
pub struct CreateFavoriteDto {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub character_id: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub planet_id: Option<i32>,
}

fn validate_favorite_target(favorite: &CreateFavoriteDto) -> Result<(), ValidationError> {
    if favorite.character_id.is_none() && favorite.planet_id.is_none() {
        return Err(ValidationError::new("favorite_target")
            .with_message("character_id or planet_id is required".into()));
    }

    Ok(())
}
