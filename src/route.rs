use dioxus::prelude::*;
use shared::{models::Role, redirect::Redirect};

use crate::{
    components::navbar::NavBar,
    pages::{
        confirm::Confirm,
        dashboard::{Dashboard, RoleDashboard},
        home::Home,
        hotel::Hotel,
        not_found::NotFound,
        signin::SignIn,
        signup::SignUp,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home,
        #[route("/hotel")]
        Hotel,
        #[nest("/auth")]
            #[route("/signin")]
            SignIn,
            #[route("/signup?:role")]
            SignUp { role: String },
            #[route("/confirm")]
            Confirm,
        #[end_nest]
        #[nest("/dashboard")]
            #[route("/")]
            Dashboard,
            #[route("/:role")]
            RoleDashboard { role: Role },
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::SignIn => Route::SignIn,
            Redirect::Dashboard => Route::Dashboard,
            Redirect::RoleDashboard(role) => Route::RoleDashboard { role },
        }
    }
}
