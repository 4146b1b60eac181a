//! Database layer
//!
//! This module provides database access for the EduHub backend.
//! It supports:
//! - SQLite (default, for single-binary deployment)
//! - MySQL (for larger deployments)
//!
//! The database driver is selected based on configuration.
//!
//! # Architecture
//!
//! - `pool`: the `DatabasePool` abstraction over both backends
//! - `migrations`: embedded schema migrations
//! - `sql`: composition of listing queries into parameterized SQL
//! - `collections`: table mappings for every listable model
//! - `source`: `SqlxDataSource`, the pager's data source
//!
//! # Usage
//!
//! ```ignore
//! use eduhub::config::DatabaseConfig;
//! use eduhub::db::{create_pool, migrations, SqlxDataSource};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! migrations::run_migrations(&pool).await?;
//!
//! let source = SqlxDataSource::new(pool.clone());
//! ```

pub mod collections;
pub mod migrations;
pub mod pool;
pub mod source;
pub mod sql;

#[cfg(test)]
pub(crate) mod fixtures;

pub use pool::{
    create_pool, create_test_pool, DatabasePool, DynDatabasePool, MysqlDatabase, SqliteDatabase,
};
pub use source::SqlxDataSource;
pub use sql::SqlCollection;
