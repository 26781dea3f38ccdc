// src/handlers/mod.rs
pub mod error;
pub mod forecast;
pub mod industries;
pub mod scenarios;
pub mod session;
