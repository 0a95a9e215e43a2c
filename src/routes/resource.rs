//! Resource CRUD routes: one router per resource, mounted under its prefix.

use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::schema::Resource;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:id",
            get(read::<R>).put(update::<R>).delete(delete_handler::<R>),
        )
}
