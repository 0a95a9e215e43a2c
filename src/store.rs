//! Resource table DDL and startup bootstrap.

use crate::error::AppError;
use crate::schema::{Customer, Resource, User};
use sqlx::PgPool;

/// CREATE TABLE IF NOT EXISTS for a resource: `id` BIGSERIAL primary key,
/// every declared column TEXT NOT NULL.
pub fn create_table_ddl(table: &str, columns: &[&str]) -> String {
    let cols = columns
        .iter()
        .map(|c| format!("{} TEXT NOT NULL", c))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, {})",
        table, cols
    )
}

pub async fn ensure_table<R: Resource>(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&create_table_ddl(R::TABLE, R::COLUMNS))
        .execute(pool)
        .await?;
    Ok(())
}

/// Create the table for every registered resource if missing.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    ensure_table::<User>(pool).await?;
    ensure_table::<Customer>(pool).await?;
    Ok(())
}
