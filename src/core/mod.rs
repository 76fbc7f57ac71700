//! Configuration, request/response models and process-wide state

pub mod config;
pub mod models;
pub mod state;
