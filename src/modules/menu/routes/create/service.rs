use super::types::{request, response};
use crate::{
    modules::menu::repository::{self, MenuItem},
    types::{database, Context},
};
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = match payload.body {
        Value::Object(body) => body,
        _ => {
            return Err(response::Error::InvalidBody(String::from(
                "Request body must be a JSON object",
            )))
        }
    };

    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or(response::Error::NameRequired)?;

    let item = MenuItem::from_submission(name.clone(), &body);

    // existence check and write happen in a single conditional create
    repository::create(ctx.db.as_ref(), item)
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists { .. } => {
                response::Error::MenuItemExists(name.clone())
            }
            err => response::Error::FailedToCreateMenuItem(err),
        })
        .map(|_| response::Success::MenuItemCreated(name))
}
