use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
};
use edusync_core::AppError;
use edusync_models::{LoginRequest, RegisterRequest};
use tower_sessions::Session;
use tracing::{info, instrument};

use super::github::GithubAuthService;
use super::model::{CallbackParams, LoginResponse, ProtectedResponse, RegisterResponse};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::middleware::session::{AuthSession, CsrfSession};
use crate::modules::resource::model::MessageResponse;
use crate::state::{AppState, GithubOAuth};
use crate::validator::ValidatedJson;

const GITHUB_NOT_CONFIGURED: &str = "GitHub login is not configured";

fn github(state: &AppState) -> Result<&GithubOAuth, AppError> {
    state
        .github
        .as_ref()
        .ok_or_else(|| AppError::not_found(GITHUB_NOT_CONFIGURED))
}

/// Session status as plain text.
#[instrument(skip(session))]
pub async fn index(session: Session) -> Result<String, AppError> {
    let text = match AuthSession::new(&session).user().await? {
        Some(user) => format!("Logged in as {}", user.username),
        None => "Logged Out".to_string(),
    };

    Ok(text)
}

#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let id = AuthService::register_user(&state.store, dto).await?;

    info!(id = %id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: id.to_hex(),
        }),
    ))
}

#[instrument(skip(state, session, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = AuthService::login_user(&state.store, dto).await?;
    AuthSession::new(&session).login(&user).await?;

    info!(user = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}

#[instrument(skip(session))]
pub async fn logout_user(session: Session) -> Result<Json<MessageResponse>, AppError> {
    AuthSession::new(&session).logout().await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}

pub async fn protected(AuthUser(user): AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: format!("Welcome {}, you have access to this protected resource.", user.username),
        user,
    })
}

#[instrument(skip(state, session))]
pub async fn github_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, AppError> {
    let (url, csrf_token) = GithubAuthService::new(github(&state)?).login_url();

    CsrfSession::new(&session).set_token(csrf_token.secret()).await?;

    Ok(Redirect::to(url.as_str()))
}

#[instrument(skip(state, session, params))]
pub async fn github_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AppError> {
    let github = github(&state)?;

    CsrfSession::new(&session).validate(&params.state).await?;

    if let Some(error) = params.error {
        return Err(AppError::unauthorized(format!("GitHub login failed: {error}")));
    }
    if params.code.is_empty() {
        return Err(AppError::validation("Missing authorization code"));
    }

    let user = GithubAuthService::new(github).callback(params.code).await?;
    AuthSession::new(&session).login(&user).await?;

    info!(user = %user.username, "User logged in with GitHub");

    Ok(Redirect::to("/"))
}
