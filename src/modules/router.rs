use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

use super::{media, menu, order};

async fn home() -> &'static str {
    "Backend is running!"
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(home))
        .merge(menu::routes::get_router())
        .merge(media::routes::get_router())
        .merge(order::routes::get_router())
}
