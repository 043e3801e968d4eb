use anyhow::Context;
use edusync_core::AppError;
use edusync_db::{Document, ObjectId, Store};
use edusync_models::ResourceSchema;
use tracing::instrument;

use super::model::{UpdateStatus, not_found_message};

pub struct ResourceService;

impl ResourceService {
    #[instrument(skip(store, schema), fields(collection = schema.collection))]
    pub async fn list(store: &Store, schema: &ResourceSchema) -> Result<Vec<Document>, AppError> {
        store
            .find_all(schema.collection)
            .await
            .with_context(|| format!("Failed to list {}", schema.collection))
            .map_err(AppError::internal)
    }

    #[instrument(skip(store, schema), fields(collection = schema.collection))]
    pub async fn get(
        store: &Store,
        schema: &ResourceSchema,
        id: ObjectId,
    ) -> Result<Document, AppError> {
        store
            .find_by_id(schema.collection, id)
            .await
            .with_context(|| format!("Failed to fetch {} {id}", schema.singular))
            .map_err(AppError::internal)?
            .ok_or_else(|| AppError::not_found(not_found_message(schema.label)))
    }

    #[instrument(skip(store, schema, document), fields(collection = schema.collection))]
    pub async fn create(
        store: &Store,
        schema: &ResourceSchema,
        document: Document,
    ) -> Result<ObjectId, AppError> {
        store
            .insert_one(schema.collection, document)
            .await
            .with_context(|| format!("Failed to create {}", schema.singular))
            .map_err(AppError::internal)
    }

    /// Replaces every field of an existing document, keeping its `_id`.
    #[instrument(skip(store, schema, document), fields(collection = schema.collection))]
    pub async fn replace(
        store: &Store,
        schema: &ResourceSchema,
        id: ObjectId,
        document: Document,
    ) -> Result<UpdateStatus, AppError> {
        Self::get(store, schema, id).await?;

        let outcome = store
            .replace_one(schema.collection, id, document)
            .await
            .with_context(|| format!("Failed to update {} {id}", schema.singular))
            .map_err(AppError::internal)?;

        // Deleted between the existence check and the replace.
        if outcome.matched == 0 {
            return Err(AppError::not_found(not_found_message(schema.label)));
        }

        Ok(if outcome.modified == 0 {
            UpdateStatus::Unchanged
        } else {
            UpdateStatus::Updated
        })
    }

    #[instrument(skip(store, schema), fields(collection = schema.collection))]
    pub async fn delete(store: &Store, schema: &ResourceSchema, id: ObjectId) -> Result<(), AppError> {
        let deleted = store
            .delete_one(schema.collection, id)
            .await
            .with_context(|| format!("Failed to delete {} {id}", schema.singular))
            .map_err(AppError::internal)?;

        if deleted == 0 {
            return Err(AppError::not_found(not_found_message(schema.label)));
        }

        Ok(())
    }
}
