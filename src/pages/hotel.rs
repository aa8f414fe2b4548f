use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use shared::forms::{HotelSearch, HOTEL_FILTERS};

#[component]
pub fn Hotel() -> Element {
    let mut search = use_signal(HotelSearch::default);
    let current = search();

    rsx! {
        div {
            class: "flex justify-center px-4 py-12",
            form {
                class: "w-full max-w-4xl bg-white/90 rounded-lg shadow-lg p-6 space-y-6",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();

                    match serde_json::to_string(&*search.read()) {
                        Ok(json) => info!("hotel search {json}"),
                        Err(e) => info!("hotel search failed to serialize: {e}"),
                    }
                },
                label {
                    class: "block text-sm font-medium text-gray-600",
                    "CITY / HOTEL / RESORT / AREA"
                    input {
                        class: "mt-1 w-full p-2 border rounded text-xl font-bold",
                        value: "{current.location}",
                        oninput: move |evt| search.write().location = evt.value(),
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    label {
                        "CHECK IN"
                        input {
                            r#type: "date",
                            class: "mt-1 w-full p-2 border rounded",
                            value: "{current.check_in}",
                            oninput: move |evt| search.write().check_in = evt.value(),
                        }
                    }
                    label {
                        "CHECK OUT"
                        input {
                            r#type: "date",
                            class: "mt-1 w-full p-2 border rounded",
                            min: "{current.check_in}",
                            value: "{current.check_out}",
                            oninput: move |evt| search.write().check_out = evt.value(),
                        }
                    }
                    label {
                        "ROOMS & GUESTS"
                        input {
                            class: "mt-1 w-full p-2 border rounded",
                            readonly: true,
                            value: current.occupancy(),
                        }
                    }
                }
                div {
                    class: "flex flex-wrap gap-3",
                    for filter in HOTEL_FILTERS {
                        button {
                            key: "{filter}",
                            r#type: "button",
                            class: if current.has_filter(filter) { "px-4 py-2 rounded-full border bg-blue-600 text-white" } else { "px-4 py-2 rounded-full border bg-white" },
                            onclick: move |_| search.write().toggle_filter(filter),
                            "{filter}"
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "w-full md:w-auto px-6 py-3 bg-blue-600 text-white font-semibold rounded",
                    "Search"
                }
            }
        }
    }
}
