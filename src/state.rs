//! Shared application state for all routes.
//!
//! The pool is the process-wide handle to storage; each statement checks a
//! connection out and returns it when done, including on error paths.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
