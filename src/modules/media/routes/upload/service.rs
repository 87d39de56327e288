use super::types::{request, response};
use crate::{types::Context, utils::storage::sanitize_filename};
use bytes::Bytes;
use std::{io::Read, sync::Arc};

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut file = payload.file.ok_or(response::Error::NoFilePart)?;

    let file_name = file
        .metadata
        .file_name
        .as_deref()
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .ok_or(response::Error::NoSelectedFile)?;

    let mut buf: Vec<u8> = vec![];

    file.contents.read_to_end(&mut buf).map_err(|err| {
        tracing::error!("Failed to read the uploaded file {:?}", err);
        response::Error::FailedToReadFile(err)
    })?;

    // same-named uploads replace the existing blob
    ctx.storage
        .put(
            &file_name,
            Bytes::from(buf),
            file.metadata.content_type.as_deref(),
        )
        .await
        .map_err(response::Error::FailedToUploadImage)?;

    ctx.storage
        .make_public(&file_name)
        .await
        .map_err(response::Error::FailedToUploadImage)?;

    tracing::debug!("Uploaded image {}", file_name);

    Ok(response::Success::ImageUploaded(
        ctx.storage.public_url(&file_name),
    ))
}
