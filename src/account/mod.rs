//! Account Module
//! Mission: Register accounts and authenticate credentials against the store

pub mod login;
pub mod models;
pub mod registration;
pub mod store;

pub use login::Login;
pub use models::{Account, Credentials, NewAccount, SignupParams};
pub use registration::Registration;
pub use store::{AccountStore, SqliteAccountStore};
