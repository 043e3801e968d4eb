use super::env_non_empty;

/// GitHub OAuth application credentials.
///
/// All three of `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET` and `CALLBACK_URL`
/// must be set for GitHub login to be enabled.
#[derive(Clone, Debug)]
pub struct GithubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl GithubConfig {
    pub fn from_env() -> Option<Self> {
        Some(Self {
            client_id: env_non_empty("GITHUB_CLIENT_ID")?,
            client_secret: env_non_empty("GITHUB_CLIENT_SECRET")?,
            callback_url: env_non_empty("CALLBACK_URL")?,
        })
    }
}
