//! numalgo library — application logic for the fixture suite runner.

pub mod app;
pub mod config;
pub mod errors;
