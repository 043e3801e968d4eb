//! The document store contract shared by every backend.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to whichever backend the process was started with.
pub type Store = Arc<dyn DocumentStore>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("insert into `{0}` was not acknowledged")]
    NotAcknowledged(String),

    /// A unique field already holds the submitted value.
    #[error("`{field}` value already exists in `{collection}`")]
    Duplicate { collection: String, field: String },

    #[error("document store lock poisoned")]
    Poisoned,

    #[error("document store is not initialized")]
    NotInitialized,
}

/// Result of a full-document replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// Documents whose `_id` matched.
    pub matched: u64,
    /// Documents whose content actually changed.
    pub modified: u64,
}

/// Collection-level operations over schema-flexible documents keyed by `_id`.
///
/// Documents passed to `insert_one` and `replace_one` must not carry `_id`;
/// the store assigns it on insert and keeps it on replace.
#[async_trait]
pub trait DocumentStore: Send + Sync + fmt::Debug {
    /// All documents of a collection in store order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// First document whose top-level `field` equals `value`.
    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> StoreResult<Option<Document>>;

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Inserts `document` unless another document already has the same
    /// `field` value. The check and the insert are one atomic step.
    async fn insert_unique(
        &self,
        collection: &str,
        field: &str,
        document: Document,
    ) -> StoreResult<ObjectId>;

    async fn replace_one(
        &self,
        collection: &str,
        id: ObjectId,
        document: Document,
    ) -> StoreResult<ReplaceOutcome>;

    /// Replace that fails with [`StoreError::Duplicate`] when a document other
    /// than `id` already has the same `field` value.
    async fn replace_unique(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        document: Document,
    ) -> StoreResult<ReplaceOutcome>;

    /// Number of documents removed (0 or 1).
    async fn delete_one(&self, collection: &str, id: ObjectId) -> StoreResult<u64>;
}
