mod destroy;
mod upload;

use crate::types::Context;
use axum::routing::{delete, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/upload-image", post(upload::handler))
        // preflight OPTIONS requests are answered by the CORS layer
        .route("/delete-image/:filename", delete(destroy::handler))
}
