pub mod campaign;
pub mod config;
pub mod goals;
pub mod scoring;
