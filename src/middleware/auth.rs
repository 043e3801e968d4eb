use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use edusync_core::AppError;
use edusync_models::SessionUser;
use tower_sessions::Session;

use crate::middleware::session::AuthSession;

pub const UNAUTHENTICATED_MESSAGE: &str =
    "You do not have access to this resource. Please log in first";

/// The session user of an authenticated request.
///
/// Inserted into request extensions by [`require_auth`]; extracting it from a
/// route without that middleware fails with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionUser);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(UNAUTHENTICATED_MESSAGE))
    }
}

/// Rejects requests whose session carries no user.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::post};
/// use crate::middleware::auth::require_auth;
///
/// let protected = Router::new()
///     .route("/", post(create_course))
///     .route_layer(middleware::from_fn(require_auth));
/// ```
pub async fn require_auth(
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthSession::new(&session)
        .user()
        .await?
        .ok_or_else(|| AppError::unauthorized(UNAUTHENTICATED_MESSAGE))?;

    req.extensions_mut().insert(AuthUser(user));

    Ok(next.run(req).await)
}
