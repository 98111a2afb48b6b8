pub mod account;
pub mod cache;
pub mod fallback;
pub mod hasher;
