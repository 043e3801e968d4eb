//! In-memory document store.
//!
//! Keeps every collection as an insertion-ordered `Vec` behind a lock. Data is
//! lost when the process exits. Used by the test suite and for running the API
//! without a MongoDB server.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};

use crate::store::{DocumentStore, ReplaceOutcome, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections.write().map_err(|_| StoreError::Poisoned)
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id("_id").is_ok_and(|stored| &stored == id)
}

/// `_id` first, then the caller's fields in the order given.
fn with_id(id: ObjectId, document: Document) -> Document {
    let mut stored = Document::new();
    stored.insert("_id", id);
    for (key, value) in document {
        if key != "_id" {
            stored.insert(key, value);
        }
    }
    stored
}

fn duplicate(collection: &str, field: &str) -> StoreError {
    StoreError::Duplicate {
        collection: collection.to_string(),
        field: field.to_string(),
    }
}

fn replace_in(documents: &mut [Document], id: ObjectId, document: Document) -> ReplaceOutcome {
    let Some(existing) = documents.iter_mut().find(|doc| has_id(doc, &id)) else {
        return ReplaceOutcome::default();
    };

    let replacement = with_id(id, document);
    if *existing == replacement {
        return ReplaceOutcome {
            matched: 1,
            modified: 0,
        };
    }

    *existing = replacement;
    ReplaceOutcome {
        matched: 1,
        modified: 1,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self.read()?.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let collections = self.read()?;
        let found = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| has_id(doc, &id)))
            .cloned();

        Ok(found)
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> StoreResult<Option<Document>> {
        let collections = self.read()?;
        let found = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| doc.get(field) == Some(&value)))
            .cloned();

        Ok(found)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(with_id(id, document));

        Ok(id)
    }

    async fn insert_unique(
        &self,
        collection: &str,
        field: &str,
        document: Document,
    ) -> StoreResult<ObjectId> {
        let mut collections = self.write()?;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(value) = document.get(field) {
            if documents.iter().any(|doc| doc.get(field) == Some(value)) {
                return Err(duplicate(collection, field));
            }
        }

        let id = ObjectId::new();
        documents.push(with_id(id, document));
        Ok(id)
    }

    async fn replace_one(
        &self,
        collection: &str,
        id: ObjectId,
        document: Document,
    ) -> StoreResult<ReplaceOutcome> {
        let mut collections = self.write()?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(ReplaceOutcome::default());
        };

        Ok(replace_in(documents, id, document))
    }

    async fn replace_unique(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        document: Document,
    ) -> StoreResult<ReplaceOutcome> {
        let mut collections = self.write()?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(ReplaceOutcome::default());
        };

        if let Some(value) = document.get(field) {
            let taken = documents
                .iter()
                .any(|doc| !has_id(doc, &id) && doc.get(field) == Some(value));
            if taken {
                return Err(duplicate(collection, field));
            }
        }

        Ok(replace_in(documents, id, document))
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> StoreResult<u64> {
        let mut collections = self.write()?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match documents.iter().position(|doc| has_id(doc, &id)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_find_all_empty_collection() {
        let store = MemoryStore::new();
        let documents = store.find_all("courses").await.unwrap();
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_order() {
        let store = MemoryStore::new();
        let first = store
            .insert_one("courses", doc! { "courseName": "Algebra" })
            .await
            .unwrap();
        let second = store
            .insert_one("courses", doc! { "courseName": "Biology" })
            .await
            .unwrap();
        assert_ne!(first, second);

        let documents = store.find_all("courses").await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].get_object_id("_id").unwrap(), first);
        assert_eq!(documents[0].get_str("courseName").unwrap(), "Algebra");
        assert_eq!(documents[1].get_str("courseName").unwrap(), "Biology");

        let keys: Vec<&String> = documents[0].keys().collect();
        assert_eq!(keys, vec!["_id", "courseName"]);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("students", doc! { "firstName": "Ada" })
            .await
            .unwrap();

        assert!(store.find_by_id("courses", id).await.unwrap().is_none());
        assert!(store.find_by_id("students", id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_one_by_field() {
        let store = MemoryStore::new();
        store
            .insert_one("users", doc! { "email": "a@example.com", "username": "a" })
            .await
            .unwrap();

        let found = store
            .find_one_by("users", "email", Bson::String("a@example.com".into()))
            .await
            .unwrap();
        assert_eq!(found.unwrap().get_str("username").unwrap(), "a");

        let missing = store
            .find_one_by("users", "email", Bson::String("b@example.com".into()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_replace_reports_modified_and_unchanged() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("courses", doc! { "courseName": "Algebra", "isActive": true })
            .await
            .unwrap();

        let unchanged = store
            .replace_one("courses", id, doc! { "courseName": "Algebra", "isActive": true })
            .await
            .unwrap();
        assert_eq!(unchanged, ReplaceOutcome { matched: 1, modified: 0 });

        let changed = store
            .replace_one("courses", id, doc! { "courseName": "Algebra", "isActive": false })
            .await
            .unwrap();
        assert_eq!(changed, ReplaceOutcome { matched: 1, modified: 1 });

        let stored = store.find_by_id("courses", id).await.unwrap().unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), id);
        assert!(!stored.get_bool("isActive").unwrap());
    }

    #[tokio::test]
    async fn test_replace_missing_document() {
        let store = MemoryStore::new();
        let outcome = store
            .replace_one("courses", ObjectId::new(), doc! { "courseName": "Ghost" })
            .await
            .unwrap();
        assert_eq!(outcome, ReplaceOutcome::default());
        assert!(store.find_all("courses").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_ignores_foreign_id() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("courses", doc! { "courseName": "Algebra" })
            .await
            .unwrap();

        store
            .replace_one(
                "courses",
                id,
                doc! { "_id": ObjectId::new(), "courseName": "Geometry" },
            )
            .await
            .unwrap();

        let stored = store.find_by_id("courses", id).await.unwrap().unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), id);
        assert_eq!(stored.get_str("courseName").unwrap(), "Geometry");
    }

    #[tokio::test]
    async fn test_insert_unique_rejects_taken_value() {
        let store = MemoryStore::new();
        store
            .insert_unique("users", "email", doc! { "email": "a@example.com" })
            .await
            .unwrap();

        let err = store
            .insert_unique("users", "email", doc! { "email": "a@example.com" })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        store
            .insert_unique("users", "email", doc! { "email": "b@example.com" })
            .await
            .unwrap();
        assert_eq!(store.find_all("users").await.unwrap().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_insert_unique_keeps_one() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_unique("users", "email", doc! { "email": "dup@example.com" })
                        .await
                })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.find_all("users").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_unique_allows_own_value() {
        let store = MemoryStore::new();
        let first = store
            .insert_one("users", doc! { "email": "a@example.com", "username": "a" })
            .await
            .unwrap();
        store
            .insert_one("users", doc! { "email": "b@example.com", "username": "b" })
            .await
            .unwrap();

        let outcome = store
            .replace_unique(
                "users",
                first,
                "email",
                doc! { "email": "a@example.com", "username": "ada" },
            )
            .await
            .unwrap();
        assert_eq!(outcome, ReplaceOutcome { matched: 1, modified: 1 });

        let err = store
            .replace_unique(
                "users",
                first,
                "email",
                doc! { "email": "b@example.com", "username": "ada" },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("enrollments", doc! { "status": "Enrolled" })
            .await
            .unwrap();

        assert_eq!(store.delete_one("enrollments", id).await.unwrap(), 1);
        assert_eq!(store.delete_one("enrollments", id).await.unwrap(), 0);
        assert_eq!(store.delete_one("unknown", id).await.unwrap(), 0);
    }
}
