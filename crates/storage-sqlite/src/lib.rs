//! SQLite storage implementation for NutriNest.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the store repository trait defined in
//! `nutrinest-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The key-value store repository
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod store;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export the repository
pub use store::StoreRepository;
