use axum::Router;
use edusync_models::COURSES;

use crate::modules::resource::router::init_resource_router;
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    init_resource_router(&COURSES)
}
