//! In-process stand-in for the hosted auth and database APIs.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use server::{config::Config, router, state::AppState};
use shared::models::{NewProfile, Profile};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const SERVICE_KEY: &str = "service-role-key";
pub const ANON_KEY: &str = "anon-key";

#[derive(Default)]
pub struct Provider {
    /// Admin API request bodies, with the assigned `id` added.
    pub users: Vec<Value>,
    pub profiles: Vec<Profile>,
    pub signed_out: Vec<String>,
    pub fail_profile_insert: bool,
}

pub type Shared = Arc<Mutex<Provider>>;

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn has_key(headers: &HeaderMap, key: &str) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(key)
}

fn user_json(user: &Value) -> Value {
    json!({
        "id": user["id"],
        "aud": "authenticated",
        "email": user["email"],
        "user_metadata": user["user_metadata"],
        "created_at": "2025-09-01T10:00:00.000000Z",
    })
}

fn token_for(user: &Value) -> String {
    format!("token-{}", user["id"].as_str().unwrap_or_default())
}

fn refresh_for(user: &Value) -> String {
    format!("refresh-{}", user["id"].as_str().unwrap_or_default())
}

async fn create_user(
    State(provider): State<Shared>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if !has_key(&headers, SERVICE_KEY) || bearer(&headers).as_deref() != Some(SERVICE_KEY) {
        return error(
            StatusCode::FORBIDDEN,
            json!({"code": 403, "error_code": "not_admin", "msg": "User not allowed"}),
        );
    }

    let mut provider = provider.lock().unwrap();

    if provider.users.iter().any(|u| u["email"] == body["email"]) {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "code": 422,
                "error_code": "email_exists",
                "msg": "A user with this email address has already been registered"
            }),
        );
    }

    body["id"] = json!(Uuid::new_v4());
    let user = user_json(&body);
    provider.users.push(body);

    (StatusCode::OK, Json(user)).into_response()
}

async fn token(
    State(provider): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if !has_key(&headers, ANON_KEY) {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "Invalid API key"}));
    }

    let provider = provider.lock().unwrap();

    let user = match query.get("grant_type").map(String::as_str) {
        Some("password") => provider
            .users
            .iter()
            .find(|u| u["email"] == body["email"] && u["password"] == body["password"]),
        Some("refresh_token") => provider
            .users
            .iter()
            .find(|u| body["refresh_token"].as_str() == Some(refresh_for(u).as_str())),
        _ => None,
    };

    let Some(user) = user else {
        return error(
            StatusCode::BAD_REQUEST,
            json!({"error": "invalid_grant", "error_description": "Invalid login credentials"}),
        );
    };

    let session = json!({
        "access_token": token_for(user),
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_900_000_000,
        "refresh_token": refresh_for(user),
        "user": user_json(user),
    });

    (StatusCode::OK, Json(session)).into_response()
}

async fn current_user(State(provider): State<Shared>, headers: HeaderMap) -> Response {
    let provider = provider.lock().unwrap();
    let token = bearer(&headers);

    match provider
        .users
        .iter()
        .find(|u| Some(token_for(u)) == token)
    {
        Some(user) => (StatusCode::OK, Json(user_json(user))).into_response(),
        None => error(
            StatusCode::UNAUTHORIZED,
            json!({"code": 401, "error_code": "bad_jwt", "msg": "invalid JWT"}),
        ),
    }
}

async fn logout(State(provider): State<Shared>, headers: HeaderMap) -> Response {
    let Some(token) = bearer(&headers) else {
        return error(StatusCode::UNAUTHORIZED, json!({"msg": "missing token"}));
    };

    provider.lock().unwrap().signed_out.push(token);

    StatusCode::NO_CONTENT.into_response()
}

async fn insert_profiles(
    State(provider): State<Shared>,
    headers: HeaderMap,
    Json(rows): Json<Vec<NewProfile>>,
) -> Response {
    if bearer(&headers).as_deref() != Some(SERVICE_KEY) {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"code": "42501", "message": "permission denied for table profiles"}),
        );
    }

    assert_eq!(
        headers.get("prefer").and_then(|v| v.to_str().ok()),
        Some("return=minimal")
    );

    let mut provider = provider.lock().unwrap();

    if provider.fail_profile_insert {
        return error(
            StatusCode::BAD_REQUEST,
            json!({
                "code": "23514",
                "details": null,
                "hint": null,
                "message": "new row for relation \"profiles\" violates check constraint \"profiles_role_check\""
            }),
        );
    }

    provider
        .profiles
        .extend(rows.into_iter().map(|row| Profile {
            id: row.id,
            full_name: Some(row.full_name),
            avatar_url: None,
            role: row.role,
            email: Some(row.email),
            password: Some(row.password),
            created_at: Utc::now(),
        }));

    StatusCode::CREATED.into_response()
}

async fn select_profiles(
    State(provider): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    assert_eq!(query.get("select").map(String::as_str), Some("role"));
    assert_eq!(
        headers.get("accept").and_then(|v| v.to_str().ok()),
        Some("application/vnd.pgrst.object+json")
    );

    let provider = provider.lock().unwrap();
    let id = query
        .get("id")
        .and_then(|f| f.strip_prefix("eq."))
        .unwrap_or_default();

    // row level security: users only see their own profile
    let visible = bearer(&headers) == Some(format!("token-{id}"));

    match provider
        .profiles
        .iter()
        .find(|p| visible && p.id.to_string() == id)
    {
        Some(row) => (StatusCode::OK, Json(json!({"role": row.role}))).into_response(),
        None => error(
            StatusCode::NOT_ACCEPTABLE,
            json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "hint": null,
                "message": "JSON object requested, multiple (or no) rows returned"
            }),
        ),
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Starts the fake provider, returning its base URL and recorded state.
pub async fn start_provider() -> (String, Shared) {
    let provider = Shared::default();

    let app = Router::new()
        .route("/auth/v1/admin/users", post(create_user))
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/user", get(current_user))
        .route("/auth/v1/logout", post(logout))
        .route("/rest/v1/profiles", post(insert_profiles).get(select_profiles))
        .with_state(provider.clone());

    let addr = serve(app).await;

    (format!("http://{addr}"), provider)
}

pub fn config(supabase_url: &str) -> Config {
    Config {
        port: 0,
        supabase_url: supabase_url.to_string(),
        service_role_key: SERVICE_KEY.to_string(),
        bcrypt_cost: 4,
        static_dir: None,
        cors_origins: Vec::new(),
    }
}

/// Starts the signup server against `config`, returning its base URL.
pub async fn start_server(config: Config) -> String {
    let addr = serve(router(AppState::new(config))).await;

    format!("http://{addr}")
}
