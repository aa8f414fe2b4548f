use dioxus::prelude::*;
use shared::nav::{auth_nav, service_nav, NavAction, NavItem, BECOME_GUIDE_HREF};

use crate::{
    components::avatar::{Avatar, Size},
    route::Route,
    session, ROLE, SESSION,
};

#[component]
fn AuthLink(item: NavItem, on_click: EventHandler<()>) -> Element {
    let navigator = use_navigator();

    match item.action {
        NavAction::Link(href) => rsx! {
            Link {
                class: "hover:text-blue-500",
                to: href,
                onclick: move |_| on_click.call(()),
                "{item.label}"
            }
        },
        NavAction::SignOut => rsx! {
            button {
                r#type: "button",
                class: "hover:text-blue-500",
                onclick: move |_| async move {
                    on_click.call(());
                    session::sign_out().await;
                    navigator.replace(Route::Home);
                },
                "{item.label}"
            }
        },
    }
}

#[component]
pub fn NavBar() -> Element {
    let mut mobile_menu_open = use_signal(|| false);

    let session = SESSION();
    let role = ROLE().and_then(|lookup| lookup.ok());
    let items = auth_nav(session.is_some(), role);
    let display_name = session
        .as_ref()
        .and_then(|s| s.user.user_metadata.full_name.clone().or(s.user.email.clone()));

    rsx! {
        header {
            class: "bg-white shadow-sm",
            div {
                class: "container mx-auto px-3 py-3 flex items-center justify-between",
                Link {
                    to: Route::Home,
                    class: "font-bold text-xl text-blue-900",
                    "Tourisn"
                }
                nav {
                    class: "hidden md:flex space-x-6 text-blue-900 font-medium",
                    for service in service_nav() {
                        Link {
                            key: "{service.label}",
                            to: service.href,
                            class: "hover:text-blue-500",
                            span { "{service.icon}" }
                            span { "{service.label}" }
                        }
                    }
                }
                div {
                    class: "hidden md:flex items-center space-x-6 text-blue-900 font-medium",
                    if let Some(name) = display_name {
                        Avatar { name, size: Size::Small }
                    }
                    for item in items.clone() {
                        AuthLink { key: "{item.label}", item, on_click: move |_| {} }
                    }
                }
                button {
                    class: "md:hidden text-gray-700",
                    aria_label: "Toggle menu",
                    aria_expanded: mobile_menu_open(),
                    onclick: move |_| mobile_menu_open.toggle(),
                    if mobile_menu_open() { "✕" } else { "☰" }
                }
            }
            if mobile_menu_open() {
                nav {
                    class: "md:hidden bg-white border-t text-blue-900 font-medium",
                    ul {
                        class: "px-4 py-3 space-y-3",
                        for service in service_nav() {
                            li {
                                key: "{service.label}",
                                Link {
                                    to: service.href,
                                    onclick: move |_| mobile_menu_open.set(false),
                                    "{service.icon} {service.label}"
                                }
                            }
                        }
                        for item in items {
                            li {
                                key: "{item.label}",
                                AuthLink { item, on_click: move |_| mobile_menu_open.set(false) }
                            }
                        }
                    }
                }
            }
        }
        main {
            class: "flex-grow",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "text-white border-t",
            style: "background-color: #002455",
            div {
                class: "container mx-auto px-4 py-12",
                ul {
                    li { Link { to: Route::Home, "Home" } }
                    li {
                        Link {
                            to: BECOME_GUIDE_HREF,
                            class: "font-semibold",
                            "Become a Tour guide for Us"
                        }
                    }
                }
            }
            p {
                class: "px-4 pb-6 text-sm",
                "© Tourisn. All Rights Reserved."
            }
        }
    }
}
