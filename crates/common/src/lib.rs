//! Shared utilities, configuration, and error handling for Jokebox
//!
//! This crate provides common functionality used across the Jokebox API:
//! - Configuration loaded once at startup
//! - Error types and their HTTP mapping
//! - Request extractors (validated JSON, pagination)
//! - Password hashing

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod password;

pub use config::AppConfig;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, PathParam, QueryParams, ValidatedJson};
pub use password::{check_password, hash_password, PasswordError};
