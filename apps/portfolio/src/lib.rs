pub mod config;
pub mod content;
pub mod errors;
pub mod gallery;
pub mod models;
pub mod routes;
pub mod state;
