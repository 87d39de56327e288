use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::delete_by_id(ctx.db.as_ref(), &payload.id)
        .await
        .map_err(response::Error::FailedToDeleteMenuItem)
        .map(|_| response::Success::MenuItemDeleted)
}
