use crate::utils::database::{self, Document, DocumentStore};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

pub const COLLECTION: &str = "Orders";

/// Status given to every freshly placed order. Later updates may write any value.
pub const INITIAL_STATUS: &str = "Pending";

pub struct CreateOrderPayload {
    pub table_id: Value,
    pub items: Value,
}

pub async fn create(
    db: &dyn DocumentStore,
    payload: CreateOrderPayload,
) -> Result<String, database::Error> {
    let mut order = Document::new();
    order.insert(String::from("table_id"), payload.table_id);
    order.insert(String::from("items"), payload.items);
    order.insert(
        String::from("status"),
        Value::String(String::from(INITIAL_STATUS)),
    );
    order.insert(
        String::from("timestamp"),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
    );

    db.add(COLLECTION, order).await.map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        err
    })
}

pub async fn find_many(db: &dyn DocumentStore) -> Result<Vec<(String, Document)>, database::Error> {
    db.list(COLLECTION).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch orders: {}", err);
        err
    })
}

pub async fn find_many_by_table_id(
    db: &dyn DocumentStore,
    table_id: &str,
) -> Result<Vec<Document>, database::Error> {
    db.find_by_field(COLLECTION, "table_id", &Value::String(table_id.to_string()))
        .await
        .map(|orders| orders.into_iter().map(|(_, order)| order).collect())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch orders for table {}: {}",
                table_id,
                err
            );
            err
        })
}

pub async fn update_order_status(
    db: &dyn DocumentStore,
    id: &str,
    status: Value,
) -> Result<(), database::Error> {
    let mut fields = Document::new();
    fields.insert(String::from("status"), status);

    db.update(COLLECTION, id, fields).await.map_err(|err| {
        tracing::error!("Error occurred while trying to update order {}: {}", id, err);
        err
    })
}
