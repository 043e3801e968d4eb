use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::controller::{delete_user, get_user, get_users, update_user};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Accounts are created through `POST /register`, not here.
pub fn init_users_router() -> Router<AppState> {
    let public = Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user));

    let protected = Router::new()
        .route("/{id}", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn(require_auth));

    public.merge(protected)
}
