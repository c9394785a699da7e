//! Account Storage
//! Mission: Persist account records keyed by email with SQLite

use crate::account::models::{Account, NewAccount};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::info;
use uuid::Uuid;

/// Storage contract consumed by the workflows. One implementation per
/// backing technology; tests substitute recording fakes.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Point lookup by the unique email key.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Insert a new account and return it with the store-assigned id.
    async fn insert(&self, new_account: NewAccount) -> Result<Account>;

    /// Persist an access token against the account identified by email.
    async fn update_access_token(&self, email: &str, token: &str) -> Result<()>;
}

/// Account storage with SQLite backend
pub struct SqliteAccountStore {
    db_path: String,
}

impl SqliteAccountStore {
    /// Create a new account store and initialize database
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        // The UNIQUE constraint on email is the source of truth for the
        // one-account-per-email invariant; the registration workflow's
        // duplicate check only avoids unnecessary hashing.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS accounts (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                password TEXT NOT NULL,
                access_token TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    fn row_to_account(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
        Ok(Account {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            email: row.get(1)?,
            name: row.get(2)?,
            password: row.get(3)?,
            access_token: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, email, name, password, access_token, created_at
             FROM accounts WHERE email = ?1",
        )?;

        let account_result = stmt.query_row(params![email], Self::row_to_account);

        match account_result {
            Ok(account) => Ok(Some(account)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, new_account: NewAccount) -> Result<Account> {
        let account = Account {
            id: Uuid::new_v4(),
            email: new_account.email,
            name: new_account.name,
            password: new_account.password,
            access_token: None,
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO accounts (id, email, name, password, access_token, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                account.id.to_string(),
                account.email,
                account.name,
                account.password,
                account.access_token,
                account.created_at,
            ],
        )
        .context("Failed to insert account")?;

        info!("✅ Created account: {}", account.email);

        Ok(account)
    }

    async fn update_access_token(&self, email: &str, token: &str) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        let rows_affected = conn
            .execute(
                "UPDATE accounts SET access_token = ?1 WHERE email = ?2",
                params![token, email],
            )
            .context("Failed to update access token")?;

        if rows_affected == 0 {
            bail!("Account not found: {}", email);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (SqliteAccountStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = SqliteAccountStore::new(db_path).unwrap();
        (store, temp_file)
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            name: "Test Account".to_string(),
            password: "$2b$12$hashed-password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_round_trip() {
        let (store, _temp) = create_test_store();

        let inserted = store.insert(new_account("a@x.com")).await.unwrap();
        assert_eq!(inserted.email, "a@x.com");
        assert_eq!(inserted.name, "Test Account");
        assert_eq!(inserted.password, "$2b$12$hashed-password");
        assert!(!inserted.id.is_nil());

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.email, inserted.email);
        assert_eq!(found.name, inserted.name);
        assert_eq!(found.password, inserted.password);
        assert!(found.access_token.is_none());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let (store, _temp) = create_test_store();

        let found = store.find_by_email("nobody@x.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_store() {
        let (store, _temp) = create_test_store();

        store.insert(new_account("dup@x.com")).await.unwrap();

        // Second insert for the same email violates the UNIQUE constraint
        let result = store.insert(new_account("dup@x.com")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_access_token_persists() {
        let (store, _temp) = create_test_store();

        store.insert(new_account("a@x.com")).await.unwrap();
        store
            .update_access_token("a@x.com", "token-123")
            .await
            .unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.access_token.as_deref(), Some("token-123"));
    }

    #[tokio::test]
    async fn test_update_access_token_unknown_email_fails() {
        let (store, _temp) = create_test_store();

        let result = store.update_access_token("nobody@x.com", "token-123").await;
        assert!(result.is_err());
    }
}
