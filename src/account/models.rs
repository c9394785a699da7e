//! Account Models
//! Mission: Define the account record and the transient request-scoped values

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted account record. The store is the sole owner of durable state;
/// everything else in this module is request-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String, // bcrypt hash - never serialize
    pub access_token: Option<String>,
    pub created_at: String,
}

/// Signup candidate as submitted by the caller. `password` is plaintext and
/// must never reach the store in this form.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Insert payload handed to the store. `password` carries the hash.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Login credentials. Lives only for the duration of one workflow call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serialized() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            password: "$2b$12$secret-hash".to_string(),
            access_token: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("a@x.com"));
    }
}
