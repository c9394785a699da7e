//! Authgate - Account signup and credential-based login over HTTP

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authgate_backend::{
    account::{Login, Registration, SqliteAccountStore},
    api::{self, AppState},
    config::{self, Config},
    crypto::{BcryptHasher, JwtIssuer},
};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_env();
    init_tracing();

    let config = Config::from_env()?;

    info!("🔐 Authgate starting");

    let store = Arc::new(SqliteAccountStore::new(&config.db_path)?);
    let hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));
    let issuer = Arc::new(JwtIssuer::new(
        config.jwt_secret.clone(),
        config.token_ttl_hours,
    ));

    info!("📊 Account store initialized at: {}", config.db_path);

    let state = AppState {
        registration: Arc::new(Registration::new(store.clone(), hasher.clone())),
        login: Arc::new(Login::new(store, hasher, issuer)),
    };

    let app = api::router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("🎯 API server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authgate_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
