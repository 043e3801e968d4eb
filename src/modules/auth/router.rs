use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{
    github_callback, github_login, index, login_user, logout_user, protected, register_user,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/logout", get(logout_user).post(logout_user))
        .route("/login/github", get(github_login))
        .route("/github/callback", get(github_callback))
        .route(
            "/protected",
            get(protected).route_layer(middleware::from_fn(require_auth)),
        )
}
