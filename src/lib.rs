pub mod error;
pub mod logger;
pub mod notes;
pub mod profile;
pub mod render;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;
