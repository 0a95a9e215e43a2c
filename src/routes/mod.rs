//! Route registration and application assembly.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::schema::{Customer, User};
use crate::state::AppState;
use axum::Router;

/// Full application router: common routes plus one CRUD router per
/// resource, each bound to its own storage table.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/users", resource_routes::<User>())
        .nest("/customer", resource_routes::<Customer>())
        .with_state(state)
}
