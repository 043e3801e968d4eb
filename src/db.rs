use std::sync::LazyLock;

use anyhow::Context;
use edusync_db::StoreGateway;
use tracing::info;

use crate::config::database::{DatabaseConfig, init_store};
use crate::config::github::GithubConfig;
use crate::config::server::ServerConfig;
use crate::config::session::SessionConfig;
use crate::state::{AppState, GithubOAuth};

static STORE_GATEWAY: LazyLock<StoreGateway> = LazyLock::new(StoreGateway::new);

/// The process-wide store gateway.
pub fn store_gateway() -> &'static StoreGateway {
    &STORE_GATEWAY
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let store = init_store(&DatabaseConfig::from_env(), store_gateway()).await?;

    let github = match GithubConfig::from_env() {
        Some(config) => {
            Some(GithubOAuth::from_config(&config).context("Invalid GitHub OAuth configuration")?)
        }
        None => {
            info!("GitHub credentials not set; GitHub login is disabled");
            None
        }
    };

    Ok(AppState {
        store,
        github,
        session_config: SessionConfig::from_env(),
        server_config: ServerConfig::from_env(),
    })
}
