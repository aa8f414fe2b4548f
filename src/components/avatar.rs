use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum Size {
    Small,
    Large,
}

const COLORS: [&str; 6] = [
    "bg-blue-500",
    "bg-teal-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-indigo-500",
    "bg-emerald-500",
];

/// Up to two initials; an email address contributes its local part only.
fn initials(name: &str) -> String {
    let name = name.split('@').next().unwrap_or(name);

    name.split(|c: char| c.is_whitespace() || c == '.' || c == '_')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[component]
pub fn Avatar(name: String, size: Size) -> Element {
    let size_class = match size {
        Size::Small => "w-8 h-8 text-sm",
        Size::Large => "w-16 h-16 text-xl",
    };

    let initials = initials(&name);

    let color_idx = initials
        .chars()
        .fold(0, |pv, cv| (pv + cv as usize) % COLORS.len());

    rsx! {
        div {
            title: "{name}",
            class: "{COLORS[color_idx]} rounded-full flex items-center justify-center font-semibold text-white {size_class}",
            "{initials}"
        }
    }
}
