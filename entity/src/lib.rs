pub mod prelude;

pub mod character;
pub mod comment;
pub mod favorite;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
