use axum::{Json, Router, http::StatusCode, middleware};
use serde_json::{Value, json};
use tower_http::timeout::TimeoutLayer;
use tower_sessions::cookie::{SameSite, time::Duration};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::students::router::init_students_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}

pub fn init_router(state: AppState) -> Router {
    // Lax so the cookie survives the cross-site redirect back from GitHub.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(state.session_config.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            state.session_config.inactivity_minutes,
        )));

    let timeout = state.server_config.request_timeout();

    Router::new()
        .merge(init_auth_router())
        .nest("/students", init_students_router())
        .nest("/courses", init_courses_router())
        .nest("/enrollments", init_enrollments_router())
        .nest("/users", init_users_router())
        .fallback(route_not_found)
        .with_state(state)
        .layer(session_layer)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(middleware::from_fn(logging_middleware))
}
