pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod service;
pub mod solver;
pub mod store;
pub mod table;
pub mod types;
