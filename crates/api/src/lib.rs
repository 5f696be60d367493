pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod inputs;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use state::AppState;
