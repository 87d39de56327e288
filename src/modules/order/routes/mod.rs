mod list;
mod place;
mod status;
mod update_status;

use crate::types::Context;
use axum::routing::{get, post, put, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/order", post(place::handler))
        .route("/order/:order_id", put(update_status::handler))
        .route("/order-status/:table_id", get(status::handler))
        .route("/orders", get(list::handler))
}
