use super::{generate_id, Document, DocumentStore, Error};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{btree_map::Entry, BTreeMap, HashMap};
use tokio::sync::RwLock;

/// In-process document store. Collections are kept ordered by id so listings match the
/// postgres backend.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, Error> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, data)| (id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.get(id).cloned()))
    }

    async fn create(&self, collection: &str, id: &str, data: Document) -> Result<(), Error> {
        let mut collections = self.collections.write().await;

        match collections
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
        {
            Entry::Vacant(entry) => {
                entry.insert(data);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), Error> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), data);

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

        let mut collections = self.collections.write().await;

        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| Error::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        document.extend(fields);

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), Error> {
        if let Some(documents) = self.collections.write().await.get_mut(collection) {
            documents.remove(id);
        }

        Ok(())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Document)>, Error> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, data)| data.get(field) == Some(value))
                    .map(|(id, data)| (id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn create_refuses_to_overwrite() {
        let store = MemoryDocumentStore::new();

        store
            .create("MenuItems", "Pizza", document(json!({ "price": 10 })))
            .await
            .unwrap();

        let err = store
            .create("MenuItems", "Pizza", document(json!({ "price": 99 })))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::AlreadyExists { .. }));
        assert_eq!(
            store.get("MenuItems", "Pizza").await.unwrap(),
            Some(document(json!({ "price": 10 })))
        );
    }

    #[tokio::test]
    async fn set_replaces_the_whole_document() {
        let store = MemoryDocumentStore::new();

        store
            .set("MenuItems", "Soup", document(json!({ "price": 4, "description": "hot" })))
            .await
            .unwrap();
        store
            .set("MenuItems", "Soup", document(json!({ "price": 5 })))
            .await
            .unwrap();

        assert_eq!(
            store.get("MenuItems", "Soup").await.unwrap(),
            Some(document(json!({ "price": 5 })))
        );
    }

    #[tokio::test]
    async fn update_merges_fields_and_fails_on_missing_document() {
        let store = MemoryDocumentStore::new();

        store
            .set("Orders", "a", document(json!({ "status": "Pending", "table_id": "1" })))
            .await
            .unwrap();
        store
            .update("Orders", "a", document(json!({ "status": "Served" })))
            .await
            .unwrap();

        assert_eq!(
            store.get("Orders", "a").await.unwrap(),
            Some(document(json!({ "status": "Served", "table_id": "1" })))
        );

        let err = store
            .update("Orders", "missing", document(json!({ "status": "Served" })))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_refuses_an_empty_field_set() {
        let store = MemoryDocumentStore::new();

        store
            .set("MenuItems", "Tea", document(json!({ "price": 2 })))
            .await
            .unwrap();

        let err = store
            .update("MenuItems", "Tea", Document::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::EmptyUpdate { .. }));
        assert_eq!(
            store.get("MenuItems", "Tea").await.unwrap(),
            Some(document(json!({ "price": 2 })))
        );
    }

    #[tokio::test]
    async fn delete_ignores_missing_documents() {
        let store = MemoryDocumentStore::new();

        store.delete("MenuItems", "Ghost").await.unwrap();

        store
            .set("MenuItems", "Tea", document(json!({})))
            .await
            .unwrap();
        store.delete("MenuItems", "Tea").await.unwrap();

        assert!(store.list("MenuItems").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_field_matches_exact_json_values() {
        let store = MemoryDocumentStore::new();

        let first = store
            .add("Orders", document(json!({ "table_id": "5" })))
            .await
            .unwrap();
        store
            .add("Orders", document(json!({ "table_id": 5 })))
            .await
            .unwrap();
        store
            .add("Orders", document(json!({ "table_id": "6" })))
            .await
            .unwrap();

        let found = store
            .find_by_field("Orders", "table_id", &json!("5"))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, first);
    }
}
