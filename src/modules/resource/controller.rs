use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use edusync_core::AppError;
use edusync_db::ObjectId;
use edusync_models::{ResourceSchema, SchemaError, document_to_json};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::model::{MessageResponse, created_message, deleted_message};
use super::service::ResourceService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::JsonBody;

/// Schema attached to a resource router with `Extension`.
pub type Schema = Extension<&'static ResourceSchema>;

fn schema_error(err: SchemaError) -> AppError {
    match err {
        SchemaError::InvalidId(_) => AppError::malformed_id(err.to_string()),
        other => AppError::validation(other.to_string()),
    }
}

fn parse_id(schema: &ResourceSchema, raw: &str) -> Result<ObjectId, AppError> {
    schema.parse_id(raw).map_err(schema_error)
}

#[instrument(skip(state, schema), fields(collection = schema.collection))]
pub async fn list_documents(
    State(state): State<AppState>,
    Extension(schema): Schema,
) -> Result<Json<Vec<Value>>, AppError> {
    let documents = ResourceService::list(&state.store, schema).await?;
    Ok(Json(documents.into_iter().map(document_to_json).collect()))
}

#[instrument(skip(state, schema), fields(collection = schema.collection))]
pub async fn get_document(
    State(state): State<AppState>,
    Extension(schema): Schema,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(schema, &id)?;
    let document = ResourceService::get(&state.store, schema, id).await?;
    Ok(Json(document_to_json(document)))
}

#[instrument(skip(state, schema, auth_user, body), fields(collection = schema.collection))]
pub async fn create_document(
    State(state): State<AppState>,
    Extension(schema): Schema,
    auth_user: AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let document = schema.validate(&body).map_err(schema_error)?;
    let id = ResourceService::create(&state.store, schema, document).await?;

    info!(id = %id, user = auth_user.username(), "Created {}", schema.singular);

    let mut response = Map::new();
    response.insert("message".into(), Value::String(created_message(schema)));
    response.insert(schema.id_key.into(), Value::String(id.to_hex()));

    Ok((StatusCode::CREATED, Json(Value::Object(response))))
}

#[instrument(skip(state, schema, auth_user, body), fields(collection = schema.collection))]
pub async fn update_document(
    State(state): State<AppState>,
    Extension(schema): Schema,
    auth_user: AuthUser,
    Path(id): Path<String>,
    body: Result<JsonBody<Value>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    // Id format is reported ahead of any body error.
    let id = parse_id(schema, &id)?;
    let JsonBody(body) = body?;
    let document = schema.validate(&body).map_err(schema_error)?;
    let status = ResourceService::replace(&state.store, schema, id, document).await?;

    info!(id = %id, user = auth_user.username(), ?status, "Replaced {}", schema.singular);

    Ok(Json(MessageResponse::new(status.message(schema.label))))
}

#[instrument(skip(state, schema, auth_user), fields(collection = schema.collection))]
pub async fn delete_document(
    State(state): State<AppState>,
    Extension(schema): Schema,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(schema, &id)?;
    ResourceService::delete(&state.store, schema, id).await?;

    info!(id = %id, user = auth_user.username(), "Deleted {}", schema.singular);

    Ok(Json(MessageResponse::new(deleted_message(schema.label))))
}
