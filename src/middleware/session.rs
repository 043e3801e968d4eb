//! Typed access to the values this API keeps in the session.

use edusync_core::AppError;
use edusync_models::SessionUser;
use tower_sessions::Session;

const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

/// Authentication state of the current session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as authenticated.
    ///
    /// The session id is rotated first so an id issued before login cannot
    /// be reused to ride the authenticated session.
    pub async fn login(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await.map_err(AppError::internal)?;
        self.session
            .insert(SESSION_AUTH_USER, user)
            .await
            .map_err(AppError::internal)
    }

    pub async fn user(&self) -> Result<Option<SessionUser>, AppError> {
        self.session
            .get::<SessionUser>(SESSION_AUTH_USER)
            .await
            .map_err(AppError::internal)
    }

    /// Drops all session data and deletes the session from the store.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await.map_err(AppError::internal)
    }
}

/// CSRF state for the GitHub OAuth round trip.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_OAUTH_CSRF_TOKEN, token)
            .await
            .map_err(AppError::internal)
    }

    /// Removes the stored token and checks it against `state`.
    ///
    /// The token is single use: it is removed whether or not it matches.
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        let stored: Option<String> = self
            .session
            .remove(SESSION_OAUTH_CSRF_TOKEN)
            .await
            .map_err(AppError::internal)?;

        match stored {
            Some(token) if token == state => Ok(()),
            _ => Err(AppError::unauthorized("OAuth state mismatch")),
        }
    }
}
