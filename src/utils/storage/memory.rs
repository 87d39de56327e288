use super::{BlobStore, Error};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use tokio::sync::RwLock;
use urlencoding::encode;

#[derive(Clone, Debug)]
pub struct StoredBlob {
    pub contents: Bytes,
    pub content_type: Option<String>,
    pub public: bool,
}

pub struct MemoryBlobStore {
    bucket: String,
    public_url: String,
    blobs: RwLock<HashMap<String, StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new(bucket: String, public_url: String) -> Self {
        Self {
            bucket,
            public_url: public_url.trim_end_matches('/').to_string(),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    pub async fn blob(&self, name: &str) -> Option<StoredBlob> {
        self.blobs.read().await.get(name).cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        name: &str,
        contents: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), Error> {
        self.blobs.write().await.insert(
            name.to_string(),
            StoredBlob {
                contents,
                content_type: content_type.map(String::from),
                public: false,
            },
        );

        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool, Error> {
        Ok(self.blobs.read().await.contains_key(name))
    }

    async fn delete(&self, name: &str) -> Result<(), Error> {
        self.blobs
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    async fn make_public(&self, name: &str) -> Result<(), Error> {
        self.blobs
            .write()
            .await
            .get_mut(name)
            .map(|blob| blob.public = true)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{}/{}", self.public_url, self.bucket, encode(name))
    }
}
