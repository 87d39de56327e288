pub use crate::utils::{config::Config, database, storage};
use crate::utils::config::{DatabaseConfig, StorageConfig};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db: Arc<dyn database::DocumentStore>,
    pub storage: Arc<dyn storage::BlobStore>,
}

impl Context {
    pub fn new(
        app: AppContext,
        db: Arc<dyn database::DocumentStore>,
        storage: Arc<dyn storage::BlobStore>,
    ) -> Self {
        Self { app, db, storage }
    }

    pub async fn close(&self) {
        self.db.close().await;
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db: Arc<dyn database::DocumentStore> = match self.database {
            DatabaseConfig::Postgres {
                url,
                max_connections,
            } => {
                let store = database::PostgresDocumentStore::connect(&url, max_connections).await?;
                store.migrate().await?;
                tracing::info!("Connected to postgres document store");
                Arc::new(store)
            }
            DatabaseConfig::Memory => {
                tracing::warn!("Using in-memory document store, data will not survive a restart");
                Arc::new(database::MemoryDocumentStore::new())
            }
        };

        let storage: Arc<dyn storage::BlobStore> = match self.storage {
            StorageConfig::Gcs {
                bucket,
                access_token,
                api_endpoint,
                public_url,
            } => Arc::new(storage::GcsBlobStore::new(
                bucket,
                access_token,
                api_endpoint,
                public_url,
            )),
            StorageConfig::Memory { bucket, public_url } => {
                tracing::warn!("Using in-memory blob store, uploads will not survive a restart");
                Arc::new(storage::MemoryBlobStore::new(bucket, public_url))
            }
        };

        Ok(Context::new(
            AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            db,
            storage,
        ))
    }
}
