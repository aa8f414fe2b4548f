//! Minimal client for the hosted auth (`/auth/v1`) and database (`/rest/v1`) APIs.
//!
//! Only the calls the site needs are implemented. The same client is used with the anon
//! key in the browser and with the service-role key on the server; which key is configured
//! decides what the provider allows, e.g. [`SupabaseClient::admin_create_user`] and
//! [`SupabaseClient::insert_profile`] require the service-role key.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::{
    models::{NewProfile, Role, User, UserMetadata},
    session::Session,
};

const PROFILES: &str = "/rest/v1/profiles";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

impl SupabaseError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SupabaseError::Http(e) => e.status().map(|s| s.as_u16()),
            SupabaseError::Api { status, .. } => Some(*status),
        }
    }
}

/// Body of `POST /auth/v1/admin/users`.
#[derive(Serialize, Debug, Clone)]
pub struct AdminUserAttributes {
    pub email: String,
    pub password: String,
    pub email_confirm: bool,
    pub user_metadata: UserMetadata,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RoleRow {
    role: Role,
}

#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            url,
            api_key: api_key.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        debug!("{method} {path}");

        self.http
            .request(method, format!("{}{}", self.url, path))
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    async fn send(request: RequestBuilder) -> Result<Response, SupabaseError> {
        let res = request.send().await?;
        let status = res.status();

        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();

        Err(SupabaseError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    /// Creates a user through the admin API. Needs the service-role key.
    pub async fn admin_create_user(
        &self,
        attributes: &AdminUserAttributes,
    ) -> Result<User, SupabaseError> {
        let request = self
            .request(Method::POST, "/auth/v1/admin/users", &self.api_key)
            .json(attributes);

        Ok(Self::send(request).await?.json().await?)
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SupabaseError> {
        let request = self
            .request(
                Method::POST,
                "/auth/v1/token?grant_type=password",
                &self.api_key,
            )
            .json(&PasswordGrant { email, password });

        Ok(Self::send(request).await?.json().await?)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, SupabaseError> {
        let request = self
            .request(
                Method::POST,
                "/auth/v1/token?grant_type=refresh_token",
                &self.api_key,
            )
            .json(&RefreshGrant { refresh_token });

        Ok(Self::send(request).await?.json().await?)
    }

    pub async fn get_user(&self, access_token: &str) -> Result<User, SupabaseError> {
        let request = self.request(Method::GET, "/auth/v1/user", access_token);

        Ok(Self::send(request).await?.json().await?)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        Self::send(self.request(Method::POST, "/auth/v1/logout", access_token)).await?;

        Ok(())
    }

    /// Inserts one row into `profiles`. Needs the service-role key.
    pub async fn insert_profile(&self, profile: &NewProfile) -> Result<(), SupabaseError> {
        let request = self
            .request(Method::POST, PROFILES, &self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[profile]);

        Self::send(request).await?;

        Ok(())
    }

    /// Reads `profiles.role` for `user_id` as that user.
    pub async fn fetch_role(
        &self,
        access_token: &str,
        user_id: Uuid,
    ) -> Result<Role, SupabaseError> {
        let request = self
            .request(
                Method::GET,
                &format!("{PROFILES}?select=role&id=eq.{user_id}"),
                access_token,
            )
            .header("Accept", SINGLE_OBJECT);

        let row: RoleRow = Self::send(request).await?.json().await?;

        Ok(row.role)
    }
}

/// Picks the human readable message out of an auth or database error body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| {
            parsed
                .as_ref()?
                .get(key)?
                .as_str()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string()
        })
}
