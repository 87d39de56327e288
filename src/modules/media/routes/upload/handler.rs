use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use axum_typed_multipart::{TypedMultipart, TypedMultipartError};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    payload: Result<TypedMultipart<request::Payload>, TypedMultipartError>,
) -> impl IntoResponse {
    match payload {
        Ok(TypedMultipart(payload)) => service(ctx, payload).await,
        Err(err) => Err(response::Error::from(err)),
    }
}
