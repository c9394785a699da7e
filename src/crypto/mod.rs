//! Cryptography Module
//! Mission: Hash credentials and issue bearer tokens

pub mod hasher;
pub mod token;

pub use hasher::{BcryptHasher, PasswordHasher};
pub use token::{JwtIssuer, TokenIssuer};
