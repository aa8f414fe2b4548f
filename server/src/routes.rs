use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{
    api::{SignupRequest, SignupResponse},
    models::{NewProfile, UserMetadata},
    supabase::{AdminUserAttributes, SupabaseError},
};
use tracing::{info, warn};

use crate::{error::AppError, state::AppState};

// transport errors carry the provider's internal URL
fn client_message(e: SupabaseError, fallback: &str) -> String {
    match e {
        SupabaseError::Api { message, .. } => message,
        SupabaseError::Http(_) => fallback.to_string(),
    }
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Creates the auth user, then the matching `profiles` row. A failed insert leaves the
/// auth user in place; nothing is rolled back.
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected signup payload: {e}");
        AppError::MalformedPayload
    })?;

    request.validate()?;

    let full_name = request.full_name.trim().to_string();
    let email = request.email.trim().to_string();

    let attributes = AdminUserAttributes {
        email: email.clone(),
        password: request.password.clone(),
        email_confirm: true,
        user_metadata: UserMetadata {
            full_name: Some(full_name.clone()),
            role: Some(request.role),
        },
    };

    let user = state
        .supabase
        .admin_create_user(&attributes)
        .await
        .map_err(|e| {
            warn!("Creating auth user for {email} failed: {e}");

            AppError::AuthUser(client_message(e, "failed to create auth user"))
        })?;

    let cost = state.config.bcrypt_cost;
    let password = request.password;
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(Box::new(e)))??;

    let profile = NewProfile {
        id: user.id,
        full_name,
        email,
        role: request.role,
        password: hashed,
    };

    state.supabase.insert_profile(&profile).await.map_err(|e| {
        warn!(
            "Inserting profile for {} failed, auth user left without a profile: {e}",
            user.id
        );

        AppError::Profile(client_message(e, "failed to create profile"))
    })?;

    info!("Signed up {} as {}", user.id, request.role);

    Ok((StatusCode::CREATED, Json(SignupResponse { ok: true })))
}
