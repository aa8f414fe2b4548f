use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use shared::{
    session::{Session, STORAGE_KEY},
    supabase::SupabaseClient,
};
use web_sys::Storage;

use crate::{ROLE, SESSION, SUPABASE_ANON_KEY, SUPABASE_URL};

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn supabase() -> SupabaseClient {
    SupabaseClient::new(SUPABASE_URL, SUPABASE_ANON_KEY)
}

/// Session restored from local storage; stale entries are removed.
pub fn load() -> Option<Session> {
    let storage = storage()?;
    let raw = storage.get_item(STORAGE_KEY).ok()??;

    let session = Session::from_storage(&raw, Utc::now());
    if session.is_none() {
        storage.remove_item(STORAGE_KEY).ok()?;
    }

    session
}

fn persist(session: Option<&Session>) {
    let Some(storage) = storage() else {
        warn!("local storage unavailable, session won't survive a reload");
        return;
    };

    let result = match session.map(Session::to_storage) {
        Some(Ok(raw)) => storage.set_item(STORAGE_KEY, &raw),
        Some(Err(e)) => {
            warn!("failed to serialize session: {e}");
            return;
        }
        None => storage.remove_item(STORAGE_KEY),
    };

    if let Err(e) = result {
        warn!("failed to update stored session: {e:?}");
    }
}

pub fn set(session: Option<Session>) {
    persist(session.as_ref());

    *ROLE.write() = None;
    *SESSION.write() = session;
}

pub async fn sign_in(email: &str, password: &str) -> anyhow::Result<()> {
    let session = supabase().sign_in_with_password(email, password).await?;
    info!("signed in {}", session.user.id);

    set(Some(session));

    Ok(())
}

/// Ends the session locally even when the provider call fails.
pub async fn sign_out() {
    let current = (*SESSION.peek()).clone();

    if let Some(session) = current {
        if let Err(e) = supabase().sign_out(&session.access_token).await {
            warn!("sign out request failed: {e}");
        }
    }

    set(None);
}

/// Checks a restored session against the provider and picks up changes to the user record.
pub async fn verify() {
    let Some(current) = (*SESSION.peek()).clone() else {
        return;
    };

    let result = supabase().get_user(&current.access_token).await;

    if (*SESSION.peek()).as_ref().map(|s| &s.access_token) != Some(&current.access_token) {
        return;
    }

    match result {
        Ok(user) if user != current.user => {
            let fresh = Session { user, ..current };

            persist(Some(&fresh));
            *SESSION.write() = Some(fresh);
        }
        Ok(_) => {}
        Err(e) if e.status() == Some(401) => {
            warn!("stored session rejected by the provider: {e}");
            set(None);
        }
        Err(e) => warn!("could not verify session: {e}"),
    }
}

pub async fn refresh_if_needed() {
    let Some(session) = (*SESSION.peek()).clone() else {
        return;
    };

    let now = Utc::now();
    if !session.needs_refresh(now) {
        return;
    }

    match supabase().refresh_session(&session.refresh_token).await {
        Ok(fresh) => {
            persist(Some(&fresh));
            *SESSION.write() = Some(fresh);
        }
        Err(e) if session.is_expired(Utc::now()) => {
            warn!("session expired and could not be refreshed: {e}");
            set(None);
        }
        Err(e) => warn!("token refresh failed, retrying later: {e}"),
    }
}
