pub mod account;
pub mod outcome;
