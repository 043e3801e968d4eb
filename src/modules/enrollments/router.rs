use axum::Router;
use edusync_models::ENROLLMENTS;

use crate::modules::resource::router::init_resource_router;
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    init_resource_router(&ENROLLMENTS)
}
