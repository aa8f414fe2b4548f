use dioxus::prelude::*;
use shared::{
    models::Role,
    redirect::{guard_role_page, resolve_dashboard, Landing},
};

use crate::{
    components::avatar::{Avatar, Size},
    route::Route,
    session, ROLE, SESSION,
};

/// `/dashboard`: forwards to the dashboard of the role stored in the user's profile.
#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        if let Landing::Redirect(target) = resolve_dashboard(SESSION.read().as_ref(), ROLE()) {
            navigator.replace(Route::from(target));
        }
    });

    match resolve_dashboard(SESSION.read().as_ref(), ROLE()) {
        Landing::Failed(message) => rsx! {
            div {
                class: "p-8 text-center",
                p {
                    class: "error",
                    "Could not load your dashboard: {message}"
                }
            }
        },
        _ => rsx! {
            p {
                class: "p-8 text-center",
                "Loading your dashboard…"
            }
        },
    }
}

fn welcome(role: Role) -> &'static str {
    match role {
        Role::Traveler => "Welcome, traveler! Here you'll see your booked tours and recommendations.",
        Role::LocalGuide => "Welcome, guide! Manage your offered tours and view traveler reviews here.",
        Role::BusinessOwner => "Welcome! Manage your business listings and bookings here.",
        Role::Admin => "Welcome, admin! Oversee users, roles, and site-wide metrics here.",
    }
}

/// `/dashboard/{role}`: shown only to users whose session carries that role.
#[component]
pub fn RoleDashboard(role: Role) -> Element {
    let navigator = use_navigator();

    use_effect(use_reactive((&role,), move |(role,)| {
        let profile_role = ROLE().and_then(|lookup| lookup.ok());

        if let Landing::Redirect(target) =
            guard_role_page(SESSION.read().as_ref(), profile_role, role)
        {
            navigator.replace(Route::from(target));
        }
    }));

    let Some(current) = SESSION() else {
        return rsx! {
            p { class: "p-4", "Loading dashboard…" }
        };
    };

    let profile_role = ROLE().and_then(|lookup| lookup.ok());
    if guard_role_page(Some(&current), profile_role, role) != Landing::Stay {
        return rsx! {
            p { class: "p-4", "Loading dashboard…" }
        };
    }

    let name = current
        .user
        .user_metadata
        .full_name
        .clone()
        .or(current.user.email.clone())
        .unwrap_or_default();
    let email = current.user.email.clone().unwrap_or_default();
    let heading = format!("{} Dashboard", role.title());

    rsx! {
        div {
            class: "max-w-3xl mx-auto py-16 px-4",
            h1 {
                class: "text-3xl font-bold mb-4",
                "{heading}"
            }
            p {
                class: "mb-6 text-gray-600",
                {welcome(role)}
            }
            div {
                class: "bg-white shadow rounded-lg p-6 space-y-3",
                Avatar { name, size: Size::Large }
                p { strong { "Email: " } "{email}" }
                p { strong { "Role: " } "{role}" }
                p { strong { "User ID: " } "{current.user.id}" }
            }
            button {
                r#type: "button",
                class: "mt-6 bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700",
                onclick: move |_| async move {
                    session::sign_out().await;
                    navigator.replace(Route::SignIn);
                },
                "Logout"
            }
        }
    }
}
