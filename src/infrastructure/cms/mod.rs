// src/infrastructure/cms/mod.rs
pub mod client;
pub mod mock;
mod wire;

pub use client::CmsArticleSource;
pub use mock::MockArticleSource;
