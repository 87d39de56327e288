use super::{BlobStore, Error};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client, Response, StatusCode};
use serde_json::json;
use urlencoding::encode;

/// Google Cloud Storage through its JSON API.
#[derive(Clone)]
pub struct GcsBlobStore {
    client: Client,
    bucket: String,
    access_token: String,
    api_endpoint: String,
    public_url: String,
}

impl GcsBlobStore {
    pub fn new(
        bucket: String,
        access_token: String,
        api_endpoint: String,
        public_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            bucket,
            access_token,
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/upload/storage/v1/b/{}/o",
            self.api_endpoint,
            encode(&self.bucket)
        )
    }

    fn object_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}",
            self.api_endpoint,
            encode(&self.bucket),
            encode(name)
        )
    }
}

async fn ensure_success(res: Response) -> Result<Response, Error> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = res.text().await.map_err(|err| {
        tracing::error!("Failed to read storage error response: {:?}", err);
        Error::from(err)
    })?;

    tracing::error!("Storage request failed with {}: {}", status, body);
    Err(Error::UnexpectedResponse { status, body })
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn put(
        &self,
        name: &str,
        contents: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), Error> {
        let res = self
            .client
            .post(self.upload_url())
            .bearer_auth(&self.access_token)
            .query(&[("uploadType", "media"), ("name", name)])
            .header(
                header::CONTENT_TYPE,
                content_type.unwrap_or("application/octet-stream"),
            )
            .body(contents)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to upload {}: {:?}", name, err);
                Error::from(err)
            })?;

        ensure_success(res).await.map(|_| ())
    }

    async fn exists(&self, name: &str) -> Result<bool, Error> {
        let res = self
            .client
            .get(self.object_url(name))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while looking up {}: {:?}", name, err);
                Error::from(err)
            })?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        ensure_success(res).await.map(|_| true)
    }

    async fn delete(&self, name: &str) -> Result<(), Error> {
        let res = self
            .client
            .delete(self.object_url(name))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to delete {}: {:?}", name, err);
                Error::from(err)
            })?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name.to_string()));
        }

        ensure_success(res).await.map(|_| ())
    }

    async fn make_public(&self, name: &str) -> Result<(), Error> {
        let res = self
            .client
            .post(format!("{}/acl", self.object_url(name)))
            .bearer_auth(&self.access_token)
            .json(&json!({ "entity": "allUsers", "role": "READER" }))
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to make {} public: {:?}", name, err);
                Error::from(err)
            })?;

        ensure_success(res).await.map(|_| ())
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{}/{}", self.public_url, self.bucket, encode(name))
    }
}
