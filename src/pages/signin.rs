use dioxus::prelude::*;
use shared::redirect::{after_sign_in, Landing};

use crate::{route::Route, session, SESSION};

#[component]
pub fn SignIn() -> Element {
    let mut email = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();

    use_effect(move || {
        if let Landing::Redirect(target) = after_sign_in(SESSION.read().as_ref()) {
            navigator.replace(Route::from(target));
        }
    });

    rsx! {
        div {
            class: "max-w-md mx-auto py-16 px-4",
            h2 {
                class: "text-2xl font-semibold mb-6",
                "Sign In"
            }
            form {
                class: "space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();

                    loading.set(true);
                    error.set(None);

                    let (email, password) = (email(), password());

                    spawn(async move {
                        match session::sign_in(&email, &password).await {
                            Ok(()) => {
                                navigator.replace(Route::Dashboard);
                            }
                            Err(e) => {
                                error.set(Some(e.to_string()));
                                loading.set(false);
                            }
                        }
                    });
                },
                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    class: "w-full p-2 border rounded",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    class: "w-full p-2 border rounded",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p {
                        class: "error text-sm",
                        "{message}"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    class: "w-full bg-blue-600 text-white p-2 rounded hover:bg-blue-700",
                    if loading() { "Signing In…" } else { "Sign In" }
                }
            }
            p {
                class: "mt-6 text-center text-sm text-gray-600",
                "No account yet? "
                Link {
                    to: Route::SignUp { role: String::new() },
                    class: "text-blue-600 hover:underline",
                    "Sign up"
                }
            }
        }
    }
}
