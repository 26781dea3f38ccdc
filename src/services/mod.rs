// src/services/mod.rs
pub mod projection;
pub mod registry;
pub mod session;
