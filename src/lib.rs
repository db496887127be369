//! Read-only HTTP gateway in front of a headless CMS.
//!
//! Inbound `GET /api/articles?page=&pageSize=` requests are answered from the
//! CMS `/api/articles` endpoint, or from a deterministic mock catalog when the
//! gateway runs in mock mode. CMS failures are reported as `502 Bad Gateway`
//! with a hint describing the likely cause.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
