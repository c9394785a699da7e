//! Authgate Backend Library
//!
//! Exposes the account workflows, collaborator implementations, and HTTP
//! surface for use by the server binary and integration tests.

pub mod account;
pub mod api;
pub mod config;
pub mod crypto;
pub mod middleware;
