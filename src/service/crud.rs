//! Generic CRUD execution against PostgreSQL.
//!
//! Every operation acquires a connection from the pool for the duration of
//! a single statement and releases it on all exit paths, so concurrent
//! requests never share an in-flight cursor.

use crate::error::AppError;
use crate::schema::Resource;
use crate::sql::{delete_by_id, insert, select_all, select_by_id, update_by_id, PgBindValue, QueryBuf};
use serde_json::Value;
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// Insert one row. Storage rejections (e.g. constraint violations)
    /// surface as `AppError::Db` with the driver message intact.
    pub async fn create<R: Resource>(pool: &PgPool, record: &R) -> Result<(), AppError> {
        let q = insert(R::TABLE, R::COLUMNS, record.values());
        Self::execute(pool, &q).await?;
        Ok(())
    }

    /// Unfiltered, unpaginated scan of the resource table, ordered by id.
    pub async fn list<R: Resource>(pool: &PgPool) -> Result<Vec<Value>, AppError> {
        let q = select_all(R::TABLE, R::COLUMNS);
        Self::query_many(pool, &q).await
    }

    /// Fetch one row by primary key. Returns a JSON object or None.
    pub async fn get<R: Resource>(pool: &PgPool, id: i64) -> Result<Option<Value>, AppError> {
        let q = select_by_id(R::TABLE, R::COLUMNS, id);
        Self::query_one(pool, &q).await
    }

    /// Overwrite every declared column of the row matching `id`. The write
    /// is attempted blind; the returned rows-affected count is the caller's
    /// existence check.
    pub async fn update<R: Resource>(
        pool: &PgPool,
        id: i64,
        record: &R,
    ) -> Result<u64, AppError> {
        let q = update_by_id(R::TABLE, R::COLUMNS, record.values(), id);
        Self::execute(pool, &q).await
    }

    /// Delete by primary key from the resource's own table. Returns the
    /// rows-affected count.
    pub async fn delete<R: Resource>(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let q = delete_by_id(R::TABLE, id);
        Self::execute(pool, &q).await
    }

    async fn query_one(pool: &PgPool, q: &QueryBuf) -> Result<Option<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p)?);
        }
        let row = query.fetch_optional(pool).await?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn query_many(pool: &PgPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p)?);
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute(pool: &PgPool, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p)?);
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        let v = cell_to_value(row, name);
        map.insert(name.to_string(), v);
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
