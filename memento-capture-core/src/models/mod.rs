pub mod artifact;
pub mod config;
pub mod error;
pub mod media_models;
pub mod state;
