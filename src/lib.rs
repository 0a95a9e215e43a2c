//! Resource-to-CRUD mapping web service over PostgreSQL.
//!
//! A declared record schema ([`schema::Resource`]) is turned into five HTTP
//! operations over a SQL table: create, list, get-by-id, update, delete.

pub mod digest;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::app;
pub use schema::{Customer, Resource, User};
pub use service::CrudService;
pub use state::AppState;
pub use store::ensure_tables;
