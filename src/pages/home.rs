use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use shared::forms::{travelers_label, FlightSearch, TripType, MAX_TRAVELERS, TRAVEL_CLASSES};

const INPUT_CLASS: &str = "mt-1 w-full p-2 border rounded";

#[component]
pub fn Home() -> Element {
    let mut search = use_signal(FlightSearch::default);
    let current = search();

    rsx! {
        div {
            class: "flex justify-center px-4 py-12",
            form {
                class: "w-full max-w-2xl bg-white/90 p-6 rounded-lg shadow-lg space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();

                    let query = search.read().query();
                    match serde_json::to_string(&query) {
                        Ok(json) => info!("flight search {json}"),
                        Err(e) => info!("flight search {query:?} ({e})"),
                    }
                },
                div {
                    class: "flex space-x-2",
                    for trip_type in TripType::ALL {
                        label {
                            class: if current.trip_type == trip_type { "flex-1 text-center py-2 rounded bg-blue-800 text-white" } else { "flex-1 text-center py-2 rounded bg-blue-300" },
                            input {
                                r#type: "radio",
                                name: "trip_type",
                                class: "hidden",
                                checked: current.trip_type == trip_type,
                                onchange: move |_| search.write().trip_type = trip_type,
                            }
                            {trip_type.label()}
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label {
                        "From"
                        input {
                            class: INPUT_CLASS,
                            value: "{current.from}",
                            oninput: move |evt| search.write().from = evt.value(),
                        }
                    }
                    label {
                        "To"
                        input {
                            class: INPUT_CLASS,
                            value: "{current.to}",
                            oninput: move |evt| search.write().to = evt.value(),
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label {
                        "Departure"
                        input {
                            r#type: "date",
                            class: INPUT_CLASS,
                            value: "{current.depart_date}",
                            oninput: move |evt| search.write().depart_date = evt.value(),
                        }
                    }
                    if current.shows_return_date() {
                        label {
                            "Return"
                            input {
                                r#type: "date",
                                class: INPUT_CLASS,
                                min: "{current.depart_date}",
                                value: "{current.return_date}",
                                oninput: move |evt| search.write().return_date = evt.value(),
                            }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label {
                        "Traveler"
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt| search.write().set_travelers(&evt.value()),
                            for n in 1..=MAX_TRAVELERS {
                                option {
                                    value: "{n}",
                                    selected: current.travelers == n,
                                    {travelers_label(n)}
                                }
                            }
                        }
                    }
                    label {
                        "Class"
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt| search.write().travel_class = evt.value(),
                            for travel_class in TRAVEL_CLASSES {
                                option {
                                    value: travel_class,
                                    selected: current.travel_class == travel_class,
                                    "{travel_class}"
                                }
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "w-full py-3 bg-blue-400 font-bold rounded hover:bg-blue-500",
                    "Search"
                }
            }
        }
    }
}
