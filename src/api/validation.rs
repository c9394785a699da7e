//! Request Validation
//! Mission: Reject malformed request bodies before they reach a workflow

use std::fmt;

use crate::api::models::{LoginRequest, SignupRequest};

/// Validation failure for a single request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingParam(&'static str),
    InvalidParam(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingParam(field) => write!(f, "Missing param: {}", field),
            ValidationError::InvalidParam(field) => write!(f, "Invalid param: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_signup(req: &SignupRequest) -> Result<(), ValidationError> {
    require("name", &req.name)?;
    require("email", &req.email)?;
    require("password", &req.password)?;
    validate_email(&req.email)
}

pub fn validate_login(req: &LoginRequest) -> Result<(), ValidationError> {
    require("email", &req.email)?;
    require("password", &req.password)?;
    validate_email(&req.email)
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingParam(field));
    }
    Ok(())
}

/// Structural check only; deliverability is not this layer's concern.
fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidParam("email"));
    };

    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if !well_formed {
        return Err(ValidationError::InvalidParam("email"));
    }
    Ok(())
}
