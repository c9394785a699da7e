//! API Handlers
//! Mission: Provide the signup and login endpoints

use crate::account::models::{Credentials, SignupParams};
use crate::account::{Login, Registration};
use crate::api::models::{ApiError, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::api::validation;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<Registration>,
    pub login: Arc<Login>,
}

/// Signup endpoint - POST /api/auth/signup
///
/// A freshly registered account is logged in immediately so the caller
/// leaves with a usable access token.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    validation::validate_signup(&payload)?;

    info!("🔐 Signup attempt: {}", payload.email);

    let account = state
        .registration
        .register(SignupParams {
            email: payload.email.clone(),
            name: payload.name.clone(),
            password: payload.password.clone(),
        })
        .await
        .map_err(|e| {
            error!("Signup failed: {:#}", e);
            ApiError::Internal
        })?
        .ok_or(ApiError::EmailInUse)?;

    let token = state
        .login
        .authenticate(Credentials {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(|e| {
            error!("Post-signup login failed: {:#}", e);
            ApiError::Internal
        })?
        // The account was just created with these credentials, so a
        // rejection here is a fault, not a business outcome.
        .ok_or(ApiError::Internal)?;

    info!("✅ Signup successful: {}", account.email);

    Ok(Json(SignupResponse {
        name: account.name,
        access_token: token,
    }))
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    validation::validate_login(&payload)?;

    info!("🔐 Login attempt: {}", payload.email);

    let token = state
        .login
        .authenticate(Credentials {
            email: payload.email.clone(),
            password: payload.password,
        })
        .await
        .map_err(|e| {
            error!("Login failed: {:#}", e);
            ApiError::Internal
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    info!("✅ Login successful: {}", payload.email);

    Ok(Json(LoginResponse {
        access_token: token,
    }))
}

/// Health check - GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
