use super::types::response;
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(ctx.db.as_ref())
        .await
        .map_err(response::Error::FailedToFetchMenu)
        .map(response::Success::Menu)
}
