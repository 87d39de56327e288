use std::{env, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub enum DatabaseConfig {
    Postgres { url: String, max_connections: u32 },
    Memory,
}

#[derive(Clone, Debug)]
pub enum StorageConfig {
    Gcs {
        bucket: String,
        access_token: String,
        api_endpoint: String,
        public_url: String,
    },
    Memory {
        bucket: String,
        public_url: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";

fn required(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::Missing(name))
}

fn optional(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &'static str, default: &str) -> Result<T, Error> {
    let value = optional(name, default);
    value.parse::<T>().map_err(|_| Error::Invalid { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let host = optional("HOST", "0.0.0.0");
        let port = parsed::<u16>("PORT", "8080")?;

        let database = match optional("DOCUMENT_STORE", "postgres").as_str() {
            "postgres" => DatabaseConfig::Postgres {
                url: required("DATABASE_URL")?,
                max_connections: parsed::<u32>("DATABASE_MAX_CONNECTIONS", "4")?,
            },
            "memory" => DatabaseConfig::Memory,
            other => {
                return Err(Error::Invalid {
                    name: "DOCUMENT_STORE",
                    value: other.to_string(),
                })
            }
        };

        let bucket = required("STORAGE_BUCKET")?;
        let public_url = optional("STORAGE_PUBLIC_URL", DEFAULT_STORAGE_ENDPOINT);

        let storage = match optional("BLOB_STORE", "gcs").as_str() {
            "gcs" => StorageConfig::Gcs {
                bucket,
                access_token: required("STORAGE_ACCESS_TOKEN")?,
                api_endpoint: optional("STORAGE_API_ENDPOINT", DEFAULT_STORAGE_ENDPOINT),
                public_url,
            },
            "memory" => StorageConfig::Memory { bucket, public_url },
            other => {
                return Err(Error::Invalid {
                    name: "BLOB_STORE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            app: AppConfig { host, port },
            database,
            storage,
        })
    }
}
