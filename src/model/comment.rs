use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateCommentDto {
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub character_id: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub planet_id: Option<i32>,
}
