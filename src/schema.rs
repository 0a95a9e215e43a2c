//! Record schemas and the resource seam.
//!
//! A [`Resource`] declares everything the generic layer needs to map a
//! record type onto a SQL table: its name for messages, its backing table,
//! its column order, and how to turn an input payload into bind values.

use crate::digest::sha256_hex;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// A record type with its own storage table and CRUD operations.
pub trait Resource: Send + Sync + Sized + 'static {
    /// Singular lowercase name, used in envelope messages and error details.
    const NAME: &'static str;
    /// Backing table. Every operation for this resource targets this table only.
    const TABLE: &'static str;
    /// Column order for insert and update; `values` must match it.
    const COLUMNS: &'static [&'static str];

    /// Build a typed record from a raw JSON payload. Field presence and
    /// primitive type are checked here, before any storage access.
    fn from_body(body: Value) -> Result<Self, AppError>;

    /// Bind values in `COLUMNS` order, with write-time transforms applied.
    fn values(&self) -> Vec<Value>;
}

fn parse_record<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl Resource for User {
    const NAME: &'static str = "user";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "password", "email"];

    fn from_body(body: Value) -> Result<Self, AppError> {
        parse_record(body)
    }

    /// Password is digested here, so both create and update persist the
    /// digest and never the plaintext.
    fn values(&self) -> Vec<Value> {
        vec![
            Value::String(self.username.clone()),
            Value::String(sha256_hex(&self.password)),
            Value::String(self.email.clone()),
        ]
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Resource for Customer {
    const NAME: &'static str = "customer";
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &["name", "email", "address"];

    fn from_body(body: Value) -> Result<Self, AppError> {
        parse_record(body)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::String(self.name.clone()),
            Value::String(self.email.clone()),
            Value::String(self.address.clone()),
        ]
    }
}
