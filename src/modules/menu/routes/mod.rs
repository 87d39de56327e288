mod create;
mod delete;
mod list;
mod update;

use crate::types::Context;
use axum::routing::{get, put, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/menu", get(list::handler).post(create::handler))
        .route("/menu/:id", put(update::handler).delete(delete::handler))
}
