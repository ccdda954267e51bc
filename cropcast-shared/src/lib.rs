//! # Cropcast Shared Library
//!
//! This crate contains the domain types and business logic shared by the
//! Cropcast API server.
//!
//! ## Module Organization
//!
//! - `models`: User records and their store operations
//! - `auth`: Password hashing
//! - `db`: Connection pool and migrations
//! - `predict`: Pre-trained crop and fertilizer classifiers
//! - `validate`: Field presence and email format checks

pub mod auth;
pub mod db;
pub mod models;
pub mod predict;
pub mod validate;

/// Current version of the Cropcast shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
