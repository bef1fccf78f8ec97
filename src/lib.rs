pub mod app;
pub mod platform;
pub mod service;
pub mod utils;
