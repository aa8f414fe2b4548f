use crate::{
    models::Role,
    redirect::{SIGN_IN, SIGN_UP},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Link(String),
    SignOut,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub action: NavAction,
}

impl NavItem {
    fn link(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            action: NavAction::Link(href.into()),
        }
    }
}

pub const BECOME_GUIDE_HREF: &str = "/auth/signup?role=local_guide";

const SERVICES: [ServiceLink; 5] = [
    ServiceLink {
        label: "Flights",
        href: "/",
        icon: "✈️",
    },
    ServiceLink {
        label: "Hotel",
        href: "/hotel",
        icon: "🏨",
    },
    ServiceLink {
        label: "Tour",
        href: "/tour",
        icon: "🏝️",
    },
    ServiceLink {
        label: "Visa",
        href: "/visa",
        icon: "🛂",
    },
    ServiceLink {
        label: "T-Card",
        href: "/gift-card",
        icon: "🎁",
    },
];

pub fn service_nav() -> &'static [ServiceLink] {
    &SERVICES
}

fn role_entry(role: Role) -> NavItem {
    let label = match role {
        Role::Traveler => "My Tours",
        Role::LocalGuide => "Manage Tours",
        Role::BusinessOwner => "Business Dashboard",
        Role::Admin => "Admin Panel",
    };

    NavItem::link(label, role.dashboard_path())
}

/// Right-hand navigation. `role` is the profile role once it has been read; while it is
/// unknown a signed in user only gets the sign out entry.
pub fn auth_nav(signed_in: bool, role: Option<Role>) -> Vec<NavItem> {
    if !signed_in {
        return vec![
            NavItem::link("Sign In", SIGN_IN),
            NavItem::link("Sign Up", SIGN_UP),
        ];
    }

    role.map(role_entry)
        .into_iter()
        .chain([NavItem {
            label: "Sign Out",
            action: NavAction::SignOut,
        }])
        .collect()
}
