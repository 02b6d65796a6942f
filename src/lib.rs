//! Holocron: a REST backend for Star Wars characters, planets, user favorites and comments.

pub mod model;
pub mod server;
