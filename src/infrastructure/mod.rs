// src/infrastructure/mod.rs
pub mod cms;
pub mod time;
