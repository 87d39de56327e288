use super::{generate_id, Document, DocumentStore, Error};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Row};

#[derive(Clone)]
pub struct PostgresDocumentStore {
    pub pool: PgPool,
}

impl PostgresDocumentStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|err| {
                tracing::error!("Error connecting to database: {}", err);
                err
            })?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!().run(&self.pool).await.map_err(|err| {
            tracing::error!("Failed to run database migrations: {}", err);
            Error::from(err)
        })
    }
}

fn into_documents(rows: Vec<sqlx::postgres::PgRow>) -> Result<Vec<(String, Document)>, Error> {
    rows.into_iter()
        .map(|row| -> Result<(String, Document), Error> {
            let id: String = row.try_get("id")?;
            let Json(data): Json<Document> = row.try_get("data")?;
            Ok((id, data))
        })
        .collect()
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, Error> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = $1 ORDER BY id")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        into_documents(rows)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let Json(data): Json<Document> = row.try_get("data")?;
                Ok(Some(data))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, collection: &str, id: &str, data: Document) -> Result<(), Error> {
        let result = sqlx::query(
            "
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO NOTHING
            ",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(data))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), Error> {
        sqlx::query(
            "
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            ",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(data))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn add(&self, collection: &str, data: Document) -> Result<String, Error> {
        let id = generate_id();
        self.create(collection, &id, data).await?;
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), Error> {
        if fields.is_empty() {
            return Err(Error::EmptyUpdate {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        let result = sqlx::query(
            "
            UPDATE documents
            SET data = data || $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            ",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), Error> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Document)>, Error> {
        // containment narrows through the GIN index, `->` keeps it an exact match
        let rows = sqlx::query(
            "
            SELECT id, data
            FROM documents
            WHERE collection = $1
                AND data @> JSONB_BUILD_OBJECT($2::TEXT, $3::JSONB)
                AND data -> $2::TEXT = $3::JSONB
            ORDER BY id
            ",
        )
        .bind(collection)
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await?;

        into_documents(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
