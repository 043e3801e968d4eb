use edusync_core::{AppError, verify_password};
use edusync_db::{ObjectId, Store};
use edusync_models::auth::INVALID_CREDENTIALS;
use edusync_models::{LoginRequest, RegisterRequest, SessionUser, User};
use tracing::instrument;

use crate::modules::users::service::UserService;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn register_user(store: &Store, dto: RegisterRequest) -> Result<ObjectId, AppError> {
        UserService::create_user(store, dto).await
    }

    /// Checks the credentials and returns the user to keep in the session.
    ///
    /// An unknown email and a wrong password fail with the same error.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn login_user(store: &Store, dto: LoginRequest) -> Result<SessionUser, AppError> {
        let record = UserService::find_by_email(store, &dto.email)
            .await?
            .ok_or_else(|| AppError::validation(INVALID_CREDENTIALS))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::validation(INVALID_CREDENTIALS));
        }

        Ok(SessionUser::from(User::from(record)))
    }
}
