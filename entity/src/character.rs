use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Gender;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(80))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub eye_color: Option<String>,
    pub gender: Gender,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub species: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub height: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
