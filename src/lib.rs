#![doc = "The `tasklite` library crate."]
#![doc = ""]
#![doc = "A minimal task management backend: user registration and login with"]
#![doc = "bcrypt-hashed credentials, stateless JWT sessions, and CRUD on a shared"]
#![doc = "task list, persisted in a local SQLite file. The main binary (`main.rs`)"]
#![doc = "wires these modules into an actix-web application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
