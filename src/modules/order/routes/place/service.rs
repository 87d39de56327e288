use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut body = match payload.body {
        Value::Object(body) => body,
        _ => {
            return Err(response::Error::InvalidBody(String::from(
                "Request body must be a JSON object",
            )))
        }
    };

    let table_id = body
        .remove("table_id")
        .ok_or(response::Error::MissingKey("table_id"))?;
    let items = body
        .remove("items")
        .ok_or(response::Error::MissingKey("items"))?;

    repository::create(
        ctx.db.as_ref(),
        repository::CreateOrderPayload { table_id, items },
    )
    .await
    .map_err(response::Error::FailedToPlaceOrder)
    .map(response::Success::OrderPlaced)
}
