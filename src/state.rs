//! Application state shared across all request handlers.
//!
//! Every field is cheap to clone: the store is an `Arc`, the OAuth client is
//! plain configuration and `reqwest::Client` is reference counted internally.

use std::fmt;

use anyhow::Context;
use edusync_db::Store;
use oauth2::basic::{BasicClient, BasicErrorResponseType, BasicTokenType};
use oauth2::{
    AuthUrl, Client, ClientId, ClientSecret, EmptyExtraTokenFields, EndpointNotSet, EndpointSet,
    RedirectUrl, RevocationErrorResponseType, StandardErrorResponse, StandardRevocableToken,
    StandardTokenIntrospectionResponse, StandardTokenResponse, TokenUrl,
};

use crate::config::github::GithubConfig;
use crate::config::server::ServerConfig;
use crate::config::session::SessionConfig;

const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// OAuth2 client with the authorization and token endpoints set.
pub type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Clients needed for the GitHub login flow.
#[derive(Clone)]
pub struct GithubOAuth {
    pub oauth_client: OAuth2Client,
    /// Used for the token exchange and the profile request. Redirects are
    /// disabled as required by the OAuth2 token endpoint.
    pub http_client: reqwest::Client,
}

impl GithubOAuth {
    pub fn from_config(config: &GithubConfig) -> anyhow::Result<Self> {
        let oauth_client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(GITHUB_AUTHORIZE_URL.to_string())?)
            .set_token_uri(TokenUrl::new(GITHUB_TOKEN_URL.to_string())?)
            .set_redirect_uri(
                RedirectUrl::new(config.callback_url.clone()).context("Invalid CALLBACK_URL")?,
            );

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            oauth_client,
            http_client,
        })
    }
}

impl fmt::Debug for GithubOAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubOAuth")
            .field("client_id", self.oauth_client.client_id())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    /// `None` when GitHub credentials are not configured.
    pub github: Option<GithubOAuth>,
    pub session_config: SessionConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    /// State with default session and server settings and GitHub login disabled.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            github: None,
            session_config: SessionConfig::default(),
            server_config: ServerConfig::default(),
        }
    }
}
