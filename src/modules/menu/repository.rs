use crate::utils::database::{self, Document, DocumentStore};
use serde_json::Value;

pub const COLLECTION: &str = "MenuItems";

/// The stored shape of a menu item. The name doubles as the document id.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: Value,
    pub description: Value,
    pub availability: Value,
    pub image_url: Value,
}

impl MenuItem {
    /// Picks the known fields out of a submitted body, filling in defaults. Any other keys are
    /// dropped.
    pub fn from_submission(name: String, body: &Document) -> Self {
        Self {
            name,
            price: body.get("price").cloned().unwrap_or(Value::Null),
            description: body.get("description").cloned().unwrap_or(Value::Null),
            availability: body
                .get("availability")
                .cloned()
                .unwrap_or(Value::Bool(true)),
            image_url: body
                .get("image_url")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }

    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert(String::from("name"), Value::String(self.name));
        document.insert(String::from("price"), self.price);
        document.insert(String::from("description"), self.description);
        document.insert(String::from("availability"), self.availability);
        document.insert(String::from("image_url"), self.image_url);
        document
    }
}

pub async fn find_many(db: &dyn DocumentStore) -> Result<Vec<(String, Document)>, database::Error> {
    db.list(COLLECTION).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch menu items: {}", err);
        err
    })
}

pub async fn create(db: &dyn DocumentStore, item: MenuItem) -> Result<(), database::Error> {
    let id = item.name.clone();

    db.create(COLLECTION, &id, item.into_document())
        .await
        .map_err(|err| {
            if !matches!(err, database::Error::AlreadyExists { .. }) {
                tracing::error!("Error occurred while trying to create a menu item: {}", err);
            }
            err
        })
}

pub async fn update_by_id(
    db: &dyn DocumentStore,
    id: &str,
    fields: Document,
) -> Result<(), database::Error> {
    db.update(COLLECTION, id, fields).await.map_err(|err| {
        tracing::error!("Error occurred while trying to update menu item {}: {}", id, err);
        err
    })
}

pub async fn delete_by_id(db: &dyn DocumentStore, id: &str) -> Result<(), database::Error> {
    db.delete(COLLECTION, id).await.map_err(|err| {
        tracing::error!("Error occurred while trying to delete menu item {}: {}", id, err);
        err
    })
}
