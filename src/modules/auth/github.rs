//! GitHub OAuth2 login.

use anyhow::Context;
use edusync_core::AppError;
use edusync_models::SessionUser;
use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use tracing::instrument;
use url::Url;

use super::model::GithubProfile;
use crate::state::GithubOAuth;

const GITHUB_USER_URL: &str = "https://api.github.com/user";

pub struct GithubAuthService<'a> {
    github: &'a GithubOAuth,
}

impl<'a> GithubAuthService<'a> {
    pub fn new(github: &'a GithubOAuth) -> Self {
        Self { github }
    }

    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.github
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("read:user".to_string()))
            .add_scope(Scope::new("user:email".to_string()))
            .url()
    }

    /// Exchanges the authorization code and loads the GitHub profile.
    #[instrument(skip_all)]
    pub async fn callback(&self, code: String) -> Result<SessionUser, AppError> {
        let token = self
            .github
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.github.http_client)
            .await
            .context("GitHub token exchange failed")
            .map_err(AppError::internal)?;

        let profile = self
            .github
            .http_client
            .get(GITHUB_USER_URL)
            .bearer_auth(token.access_token().secret())
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .context("GitHub user request failed")
            .map_err(AppError::internal)?
            .json::<GithubProfile>()
            .await
            .context("Unexpected GitHub user response")
            .map_err(AppError::internal)?;

        Ok(SessionUser::from(profile))
    }
}
