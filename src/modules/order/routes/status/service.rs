use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many_by_table_id(ctx.db.as_ref(), &payload.table_id)
        .await
        .map_err(response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
