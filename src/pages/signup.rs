use anyhow::anyhow;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared::{
    api::{ErrorResponse, SignupRequest, SIGNUP_PATH},
    forms::SignupForm,
    models::Role,
};

use crate::{route::Route, API_URL};

const INPUT_CLASS: &str = "mt-1 w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500";

async fn submit(request: SignupRequest) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}{}", API_URL, SIGNUP_PATH))
        .json(&request)
        .send()
        .await?;

    if res.status().is_success() {
        return Ok(());
    }

    let message = res
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|e| {
            warn!("unreadable signup error body: {e}");
            "Signup failed".to_string()
        });

    Err(anyhow!(message))
}

/// `role` is the optional `?role=` query parameter preselecting the role picker.
#[component]
pub fn SignUp(role: String) -> Element {
    let mut form = use_signal(|| SignupForm::with_role_param(Some(role.as_str())));
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // the footer's guide link can change `role` while this page is open
    use_effect(use_reactive((&role,), move |(role,)| {
        form.write().apply_role_param(Some(role.as_str()));
    }));

    let navigator = use_navigator();
    let current = form();

    rsx! {
        div {
            class: "flex min-h-screen justify-center bg-white px-8 py-12",
            div {
                class: "w-full max-w-md",
                h2 {
                    class: "text-3xl font-bold text-blue-900 mb-6 text-center",
                    "Get Started Now"
                }
                form {
                    class: "space-y-5",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();

                        let request = match form.read().submit() {
                            Ok(request) => request,
                            Err(e) => {
                                error.set(Some(e.to_string()));
                                return;
                            }
                        };

                        loading.set(true);
                        error.set(None);

                        spawn(async move {
                            match submit(request).await {
                                Ok(()) => {
                                    navigator.push(Route::SignIn);
                                }
                                Err(e) => {
                                    error.set(Some(e.to_string()));
                                    loading.set(false);
                                }
                            }
                        });
                    },
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Name"
                        input {
                            r#type: "text",
                            placeholder: "John Doe",
                            required: true,
                            class: INPUT_CLASS,
                            value: "{current.full_name}",
                            oninput: move |evt| form.write().full_name = evt.value(),
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Email address"
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            class: INPUT_CLASS,
                            value: "{current.email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Password"
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            required: true,
                            class: INPUT_CLASS,
                            value: "{current.password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                        p {
                            class: "text-xs text-gray-500 mt-1",
                            "Must be at least 8 characters long."
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Select Role"
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt| {
                                if let Err(e) = form.write().set_role(&evt.value()) {
                                    warn!("{e}");
                                }
                            },
                            for option_role in Role::ALL {
                                option {
                                    value: option_role.as_str(),
                                    selected: current.role == option_role,
                                    {option_role.label()}
                                }
                            }
                        }
                    }
                    label {
                        class: "flex items-center text-sm text-gray-700",
                        input {
                            r#type: "checkbox",
                            class: "h-4 w-4 mr-2",
                            checked: current.agree,
                            onchange: move |evt| form.write().agree = evt.checked(),
                        }
                        "I agree to the terms & policy"
                    }
                    if let Some(message) = error() {
                        p {
                            class: "error text-sm text-center",
                            "{message}"
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        class: "w-full py-3 bg-blue-600 text-white font-semibold rounded-md shadow hover:bg-blue-700 disabled:opacity-50",
                        if loading() { "Creating Account…" } else { "Signup" }
                    }
                }
                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "Have an account? "
                    Link {
                        to: Route::SignIn,
                        class: "text-blue-600 hover:underline",
                        "Sign in"
                    }
                }
            }
        }
    }
}
