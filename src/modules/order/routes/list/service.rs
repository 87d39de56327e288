use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(ctx.db.as_ref())
        .await
        .map_err(response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
