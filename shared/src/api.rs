use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignupResponse {
    pub ok: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,

    #[error("A valid email address is required.")]
    InvalidEmail,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long.")]
    PasswordTooShort,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ValidationError::InvalidEmail),
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(())
    }
}
