//! Registration Workflow
//! Mission: Orchestrate duplicate-check, hashing, and persistence for signups

use crate::account::models::{Account, NewAccount, SignupParams};
use crate::account::store::AccountStore;
use crate::crypto::hasher::PasswordHasher;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Stateless registration workflow. Holds no request state; every call is a
/// linear chain of collaborator awaits with no retry and no local recovery.
pub struct Registration {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Registration {
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account. Returns `Ok(None)` when the email is already
    /// in use (business rejection, not a fault); collaborator errors
    /// propagate unchanged.
    pub async fn register(&self, candidate: SignupParams) -> Result<Option<Account>> {
        if self.store.find_by_email(&candidate.email).await?.is_some() {
            info!("Registration rejected, email already in use: {}", candidate.email);
            return Ok(None);
        }

        let hashed_password = self.hasher.hash(&candidate.password).await?;

        let account = self
            .store
            .insert(NewAccount {
                email: candidate.email,
                name: candidate.name,
                password: hashed_password,
            })
            .await?;

        Ok(Some(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn existing_account(email: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Existing".to_string(),
            password: "stored-hash".to_string(),
            access_token: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Store fake recording every call it receives.
    #[derive(Default)]
    struct RecordingStore {
        existing: Option<Account>,
        fail_find: bool,
        fail_insert: bool,
        find_calls: Mutex<Vec<String>>,
        inserted: Mutex<Vec<NewAccount>>,
    }

    #[async_trait]
    impl AccountStore for RecordingStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
            if self.fail_find {
                bail!("store lookup failed");
            }
            self.find_calls.lock().unwrap().push(email.to_string());
            Ok(self.existing.clone())
        }

        async fn insert(&self, new_account: NewAccount) -> Result<Account> {
            if self.fail_insert {
                bail!("store insert failed");
            }
            let account = Account {
                id: Uuid::new_v4(),
                email: new_account.email.clone(),
                name: new_account.name.clone(),
                password: new_account.password.clone(),
                access_token: None,
                created_at: Utc::now().to_rfc3339(),
            };
            self.inserted.lock().unwrap().push(new_account);
            Ok(account)
        }

        async fn update_access_token(&self, _email: &str, _token: &str) -> Result<()> {
            unreachable!("registration never updates tokens")
        }
    }

    /// Hasher fake returning a marked hash and counting invocations.
    #[derive(Default)]
    struct RecordingHasher {
        fail: bool,
        hash_calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PasswordHasher for RecordingHasher {
        async fn hash(&self, plaintext: &str) -> Result<String> {
            if self.fail {
                bail!("hashing failed");
            }
            self.hash_calls.lock().unwrap().push(plaintext.to_string());
            Ok(format!("hashed({})", plaintext))
        }

        async fn compare(&self, _plaintext: &str, _hashed: &str) -> Result<bool> {
            unreachable!("registration never compares hashes")
        }
    }

    fn candidate() -> SignupParams {
        SignupParams {
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            password: "p".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_side_effects() {
        let store = Arc::new(RecordingStore {
            existing: Some(existing_account("a@x.com")),
            ..Default::default()
        });
        let hasher = Arc::new(RecordingHasher::default());
        let registration = Registration::new(store.clone(), hasher.clone());

        let result = registration.register(candidate()).await.unwrap();

        assert!(result.is_none());
        assert!(hasher.hash_calls.lock().unwrap().is_empty());
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fresh_email_hashes_once_and_inserts_hash() {
        let store = Arc::new(RecordingStore::default());
        let hasher = Arc::new(RecordingHasher::default());
        let registration = Registration::new(store.clone(), hasher.clone());

        let account = registration.register(candidate()).await.unwrap().unwrap();

        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.name, "A");
        assert_eq!(account.password, "hashed(p)");
        assert!(!account.id.is_nil());

        let hash_calls = hasher.hash_calls.lock().unwrap();
        assert_eq!(hash_calls.as_slice(), ["p"]);

        let inserted = store.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].email, "a@x.com");
        assert_eq!(inserted[0].password, "hashed(p)");
        assert_ne!(inserted[0].password, "p");
    }

    #[tokio::test]
    async fn test_lookup_uses_candidate_email() {
        let store = Arc::new(RecordingStore::default());
        let hasher = Arc::new(RecordingHasher::default());
        let registration = Registration::new(store.clone(), hasher);

        registration.register(candidate()).await.unwrap();

        let find_calls = store.find_calls.lock().unwrap();
        assert_eq!(find_calls.as_slice(), ["a@x.com"]);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let store = Arc::new(RecordingStore {
            fail_find: true,
            ..Default::default()
        });
        let hasher = Arc::new(RecordingHasher::default());
        let registration = Registration::new(store, hasher.clone());

        let result = registration.register(candidate()).await;

        assert!(result.is_err());
        assert!(hasher.hash_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_hash_failure_propagates_without_insert() {
        let store = Arc::new(RecordingStore::default());
        let hasher = Arc::new(RecordingHasher {
            fail: true,
            ..Default::default()
        });
        let registration = Registration::new(store.clone(), hasher);

        let result = registration.register(candidate()).await;

        assert!(result.is_err());
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_propagates() {
        let store = Arc::new(RecordingStore {
            fail_insert: true,
            ..Default::default()
        });
        let hasher = Arc::new(RecordingHasher::default());
        let registration = Registration::new(store, hasher);

        let result = registration.register(candidate()).await;

        assert!(result.is_err());
    }
}
