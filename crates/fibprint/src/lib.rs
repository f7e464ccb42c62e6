//! fibprint library: application logic for the console tools.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
