pub use super::character::Entity as Character;
pub use super::comment::Entity as Comment;
pub use super::favorite::Entity as Favorite;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
