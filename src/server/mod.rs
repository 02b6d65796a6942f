//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, startup, HTTP routing,
//! controllers, services, and the repositories that persist users, characters, planets,
//! favorites and comments through SeaORM.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
