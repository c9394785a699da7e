//! Token Issuer
//! Mission: Produce opaque bearer tokens bound to an account identifier

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token issuance contract consumed by the login workflow. The token is
/// opaque to the workflow; only the issuer knows its shape.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Produce a bearer token bound to an account identifier.
    async fn issue(&self, account_id: &str) -> Result<String>;
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (account id)
    pub exp: usize,  // expiration timestamp
}

/// JWT-backed token issuer
pub struct JwtIssuer {
    secret: String,
    ttl_hours: i64,
}

impl JwtIssuer {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self { secret, ttl_hours }
    }

    /// Decode a token and extract its claims. Used by downstream consumers
    /// of the cached token; the login workflow never inspects tokens.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        Ok(decoded.claims)
    }
}

#[async_trait]
impl TokenIssuer for JwtIssuer {
    async fn issue(&self, account_id: &str) -> Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(chrono::Duration::hours(self.ttl_hours))
            .context("Invalid timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            sub: account_id.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to generate token")
    }
}
