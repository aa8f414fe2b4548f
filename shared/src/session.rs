use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Role, User, UserMetadata};

/// Local storage key the browser keeps the session under.
pub const STORAGE_KEY: &str = "tourisn.session";
pub const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid access token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("invalid stored session: {0}")]
    Storage(#[from] serde_json::Error),
}

/// Session as issued by the token endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: User,
}

fn bearer() -> String {
    "bearer".to_string()
}

/// Access token payload. Only the fields the client reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl Session {
    /// Decodes the access token without checking its signature; the browser has no key
    /// and every API call is verified by the provider anyway.
    pub fn claims(&self) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let key = DecodingKey::from_secret(&[]);
        let data = jsonwebtoken::decode::<Claims>(&self.access_token, &key, &validation)?;

        Ok(data.claims)
    }

    /// Unix timestamp the access token stops being valid at.
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at.or_else(|| self.claims().ok().map(|c| c.exp))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(true, |exp| exp <= now.timestamp())
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at()
            .map_or(true, |exp| exp - REFRESH_MARGIN_SECS <= now.timestamp())
    }

    /// Role recorded in the user's metadata at signup. The `profiles` table stays the
    /// authority; the role page guard falls back to this until that row has been read.
    pub fn role_hint(&self) -> Option<Role> {
        self.user.user_metadata.role
    }

    pub fn to_storage(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a stored session, discarding it when it can't be read or has expired.
    pub fn from_storage(raw: &str, now: DateTime<Utc>) -> Option<Session> {
        let session = serde_json::from_str::<Session>(raw).ok()?;

        session.claims().ok()?;

        if session.is_expired(now) {
            return None;
        }

        Some(session)
    }
}
