use axum::Router;
use edusync_models::STUDENTS;

use crate::modules::resource::router::init_resource_router;
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    init_resource_router(&STUDENTS)
}
