//! SQL-backed data source
//!
//! `SqlxDataSource` serves every `SqlCollection` from the shared pool. Each
//! call builds one `SqlStatement` and runs it through the driver-specific
//! helper for the configured database.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, sqlite::SqliteRow, FromRow, MySqlPool, SqlitePool};
use std::sync::Arc;

use super::sql::{count_statement, find_many_statement, SqlCollection, SqlStatement, SqlValue};
use crate::config::DatabaseDriver;
use crate::db::DynDatabasePool;
use crate::pagination::{DataSource, FindMany};

/// Data source reading collections through sqlx
#[derive(Clone)]
pub struct SqlxDataSource {
    pool: DynDatabasePool,
}

impl SqlxDataSource {
    /// Create a new data source over `pool`
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    /// Create a shared data source for use with dependency injection
    pub fn shared(pool: DynDatabasePool) -> Arc<Self> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl<C> DataSource<C> for SqlxDataSource
where
    C: SqlCollection,
    C::Record: for<'r> FromRow<'r, SqliteRow> + for<'r> FromRow<'r, MySqlRow> + Unpin,
{
    async fn find_many(&self, query: FindMany<'_, C>) -> Result<Vec<C::Record>> {
        let statement = find_many_statement(query);
        tracing::trace!("find_many {}: {}", C::NAME, statement.sql);

        let records = match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                let pool = self.pool.as_sqlite().context("SQLite pool unavailable")?;
                fetch_sqlite(pool, &statement).await
            }
            DatabaseDriver::Mysql => {
                let pool = self.pool.as_mysql().context("MySQL pool unavailable")?;
                fetch_mysql(pool, &statement).await
            }
        };

        records.with_context(|| format!("Failed to list {}", C::NAME))
    }

    async fn count(&self, filter: &C::Filter) -> Result<u64> {
        let statement = count_statement::<C>(filter);
        tracing::trace!("count {}: {}", C::NAME, statement.sql);

        let count = match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                let pool = self.pool.as_sqlite().context("SQLite pool unavailable")?;
                count_sqlite(pool, &statement).await
            }
            DatabaseDriver::Mysql => {
                let pool = self.pool.as_mysql().context("MySQL pool unavailable")?;
                count_mysql(pool, &statement).await
            }
        }
        .with_context(|| format!("Failed to count {}", C::NAME))?;

        u64::try_from(count).with_context(|| format!("Negative count for {}: {}", C::NAME, count))
    }
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn fetch_sqlite<R>(pool: &SqlitePool, statement: &SqlStatement) -> Result<Vec<R>>
where
    R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, R>(&statement.sql);
    for value in &statement.binds {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

async fn count_sqlite(pool: &SqlitePool, statement: &SqlStatement) -> Result<i64> {
    let mut query = sqlx::query_scalar::<_, i64>(&statement.sql);
    for value in &statement.binds {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }

    let count = query.fetch_one(pool).await?;
    Ok(count)
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn fetch_mysql<R>(pool: &MySqlPool, statement: &SqlStatement) -> Result<Vec<R>>
where
    R: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, R>(&statement.sql);
    for value in &statement.binds {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

async fn count_mysql(pool: &MySqlPool, statement: &SqlStatement) -> Result<i64> {
    let mut query = sqlx::query_scalar::<_, i64>(&statement.sql);
    for value in &statement.binds {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }

    let count = query.fetch_one(pool).await?;
    Ok(count)
}
