use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn Confirm() -> Element {
    rsx! {
        div {
            class: "p-8 text-center",
            h2 {
                class: "text-xl font-semibold mb-4",
                "Account Confirmed"
            }
            p { "Your account has been confirmed successfully." }
            Link {
                to: Route::SignIn,
                class: "text-blue-600 underline mt-4 block",
                "Sign in"
            }
        }
    }
}
