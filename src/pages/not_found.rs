use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page text-center",
            h1 {
                class: "text-2xl font-bold",
                "Coming soon"
            }
            p {
                class: "mt-4 text-gray-600",
                "/{path} isn't available yet."
            }
            Link {
                to: Route::Home,
                class: "text-blue-600 underline mt-4 block",
                "Back to flights"
            }
        }
    }
}
