use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = match payload.body {
        Value::Object(fields) => fields,
        _ => {
            return Err(response::Error::InvalidBody(String::from(
                "Request body must be a JSON object",
            )))
        }
    };

    // the id is not re-checked against a submitted `name`, so renames leave the id as is
    repository::update_by_id(ctx.db.as_ref(), &payload.id, fields)
        .await
        .map_err(response::Error::FailedToUpdateMenuItem)
        .map(|_| response::Success::MenuItemUpdated)
}
