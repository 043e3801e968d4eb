use axum::{
    Extension, Router, middleware,
    routing::{get, post, put},
};
use edusync_models::ResourceSchema;

use super::controller::{
    create_document, delete_document, get_document, list_documents, update_document,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Reads are open; create, replace and delete go through `require_auth`.
pub fn init_resource_router(schema: &'static ResourceSchema) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_documents))
        .route("/{id}", get(get_document));

    let protected = Router::new()
        .route("/", post(create_document))
        .route("/{id}", put(update_document).delete(delete_document))
        .route_layer(middleware::from_fn(require_auth));

    public.merge(protected).layer(Extension(schema))
}
