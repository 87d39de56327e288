use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let exists = ctx
        .storage
        .exists(&payload.filename)
        .await
        .map_err(response::Error::FailedToDeleteImage)?;

    if !exists {
        return Err(response::Error::ImageNotFound(payload.filename));
    }

    ctx.storage
        .delete(&payload.filename)
        .await
        .map_err(response::Error::FailedToDeleteImage)
        .map(|_| response::Success::ImageDeleted(payload.filename))
}
