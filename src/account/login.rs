//! Login Workflow
//! Mission: Verify credentials, issue a bearer token, and cache it on the account

use crate::account::models::{Account, Credentials};
use crate::account::store::AccountStore;
use crate::crypto::hasher::PasswordHasher;
use crate::crypto::token::TokenIssuer;
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// Stateless login workflow. An unknown email and a wrong password produce
/// the same `Ok(None)` outcome so callers cannot probe for account
/// existence.
pub struct Login {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl Login {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    /// Authenticate credentials and return a fresh access token. Returns
    /// `Ok(None)` on unknown email or wrong password; collaborator errors
    /// propagate unchanged.
    ///
    /// Token issuance and token persistence are two independent store calls:
    /// if persistence fails after issuance, the whole call fails and the
    /// issued token is never handed to the caller (at-most-once delivery).
    pub async fn authenticate(&self, credentials: Credentials) -> Result<Option<String>> {
        let Some(account) = self.store.find_by_email(&credentials.email).await? else {
            warn!("❌ Failed login attempt: {}", credentials.email);
            return Ok(None);
        };

        if !self
            .hasher
            .compare(&credentials.password, &account.password)
            .await?
        {
            warn!("❌ Failed login attempt: {}", credentials.email);
            return Ok(None);
        }

        let token = self.issue_and_cache(&account).await?;

        Ok(Some(token))
    }

    async fn issue_and_cache(&self, account: &Account) -> Result<String> {
        let token = self.issuer.issue(&account.id.to_string()).await?;
        self.store
            .update_access_token(&account.email, &token)
            .await?;
        Ok(token)
    }
}
