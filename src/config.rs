//! Configuration
//! Mission: Resolve runtime settings from the environment with sane defaults

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-in-production-minimum-32-characters";

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub db_path: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let db_path = resolve_data_path(env::var("AUTH_DB_PATH").ok(), "authgate.db");

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        if jwt_secret == DEFAULT_JWT_SECRET {
            warn!("⚠️  Using default JWT secret - CHANGE IN PRODUCTION!");
        }

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()
            .context("Invalid TOKEN_TTL_HOURS")?;

        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_COST);

        Ok(Self {
            bind_addr,
            db_path,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
        })
    }
}

/// Load .env from the working directory or the crate root.
pub fn load_env() {
    let _ = dotenv::dotenv();

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fallback = manifest_dir.join(".env");
    if fallback.exists() {
        let _ = dotenv::from_path(&fallback);
    }
}

/// Treat relative database paths as relative to the crate root, not the
/// caller's cwd.
fn resolve_data_path(env_value: Option<String>, default_filename: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let Some(raw) = env_value.filter(|v| !v.trim().is_empty()) else {
        return base.join(default_filename).to_string_lossy().to_string();
    };

    let p = PathBuf::from(raw);
    if p.is_absolute() {
        return p.to_string_lossy().to_string();
    }

    base.join(p).to_string_lossy().to_string()
}
