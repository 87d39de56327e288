use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let status = match payload.body {
        Value::Object(mut body) => body
            .remove("status")
            .ok_or(response::Error::MissingKey("status"))?,
        _ => {
            return Err(response::Error::InvalidBody(String::from(
                "Request body must be a JSON object",
            )))
        }
    };

    // no transition rules: whatever status is sent gets written
    repository::update_order_status(ctx.db.as_ref(), &payload.id, status.clone())
        .await
        .map_err(response::Error::FailedToUpdateOrderStatus)
        .map(|_| response::Success::OrderStatusUpdated {
            id: payload.id,
            status,
        })
}
