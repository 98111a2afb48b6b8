pub mod caches;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
