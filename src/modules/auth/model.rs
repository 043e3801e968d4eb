use edusync_models::SessionUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: SessionUser,
}

/// Query parameters GitHub appends when redirecting back to the callback.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub code: String,
    /// Set instead of `code` when the user declined the authorization.
    pub error: Option<String>,
}

/// The subset of `GET https://api.github.com/user` this API uses.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubProfile {
    pub id: u64,
    pub login: String,
    pub email: Option<String>,
}

impl From<GithubProfile> for SessionUser {
    fn from(profile: GithubProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.login,
            email: profile.email,
        }
    }
}
