#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn, Level};
use gloo_timers::future::TimeoutFuture;
use route::Route;
use shared::{models::Role, session::Session};

mod components;
mod pages;
mod route;
mod session;

pub static SUPABASE_URL: &str = match option_env!("SUPABASE_URL") {
    Some(x) => x,
    None => "http://localhost:54321",
};
pub static SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(x) => x,
    None => "",
};
/// Base URL of the signup server.
pub static API_URL: &str = match option_env!("API_URL") {
    Some(x) => x,
    None => "http://localhost:3000",
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");
    launch(App);
}

pub static SESSION: GlobalSignal<Option<Session>> = Signal::global(session::load);
/// Result of reading `profiles.role` for the current session, `None` while unknown.
pub static ROLE: GlobalSignal<Option<Result<Role, String>>> = Signal::global(|| None);

fn App() -> Element {
    // keep the access token fresh
    use_future(|| async move {
        session::verify().await;

        loop {
            session::refresh_if_needed().await;

            // wait for recheck token
            TimeoutFuture::new(30_000).await;
        }
    });

    let _ = use_resource(move || async move {
        let Some(current) = SESSION() else {
            *ROLE.write() = None;
            return;
        };

        let lookup = session::supabase()
            .fetch_role(&current.access_token, current.user.id)
            .await
            .map_err(|e| e.to_string());

        match &lookup {
            Ok(role) => info!("signed in as {role}"),
            Err(e) => error!("Error fetching role: {e}"),
        }

        if (*SESSION.peek()).as_ref().map(|s| s.user.id) != Some(current.user.id) {
            warn!("session changed while reading role, discarding");
            return;
        }

        *ROLE.write() = Some(lookup);
    });

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/main.css")
        }
        Router::<Route> {}
    }
}
