//! Custom extractors for Axum handlers.

pub mod uuid_path;

pub use uuid_path::UuidPath;
