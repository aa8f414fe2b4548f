//! Where a page sends the user, given what is known about their session.
//!
//! Each page runs its decision on load. Nothing here retries or rolls back: a failed role
//! lookup leaves the user where they are with the error shown.

use crate::{models::Role, session::Session};

pub const SIGN_IN: &str = "/auth/signin";
pub const SIGN_UP: &str = "/auth/signup";
pub const DASHBOARD: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    SignIn,
    Dashboard,
    RoleDashboard(Role),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::SignIn => SIGN_IN.to_string(),
            Redirect::Dashboard => DASHBOARD.to_string(),
            Redirect::RoleDashboard(role) => role.dashboard_path(),
        }
    }
}

/// Outcome of a page's load-time check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Landing {
    Stay,
    Redirect(Redirect),
    /// Stay, showing the message.
    Failed(String),
}

/// Sign-in page: an existing session skips the form.
pub fn after_sign_in(session: Option<&Session>) -> Landing {
    match session {
        Some(_) => Landing::Redirect(Redirect::Dashboard),
        None => Landing::Stay,
    }
}

/// `/dashboard`: send the user to the dashboard of the role stored in their profile.
pub fn resolve_dashboard<E: ToString>(
    session: Option<&Session>,
    role_lookup: Option<Result<Role, E>>,
) -> Landing {
    if session.is_none() {
        return Landing::Redirect(Redirect::SignIn);
    }

    match role_lookup {
        None => Landing::Stay,
        Some(Ok(role)) => Landing::Redirect(Redirect::RoleDashboard(role)),
        Some(Err(e)) => Landing::Failed(e.to_string()),
    }
}

/// `/dashboard/{role}`: only the user's own role dashboard is shown.
///
/// The role read from `profiles` decides once it is known; until then the session's metadata
/// role stands in. With neither, the user goes through `/dashboard` to wait for the lookup.
pub fn guard_role_page(
    session: Option<&Session>,
    profile_role: Option<Role>,
    requested: Role,
) -> Landing {
    let Some(session) = session else {
        return Landing::Redirect(Redirect::SignIn);
    };

    match profile_role.or_else(|| session.role_hint()) {
        Some(role) if role == requested => Landing::Stay,
        Some(role) => Landing::Redirect(Redirect::RoleDashboard(role)),
        None => Landing::Redirect(Redirect::Dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::session;
    use rstest::rstest;

    #[test]
    fn sign_in_page() {
        let s = session(None, i64::MAX);

        assert_eq!(after_sign_in(None), Landing::Stay);
        assert_eq!(
            after_sign_in(Some(&s)),
            Landing::Redirect(Redirect::Dashboard)
        );
    }

    #[test]
    fn dashboard_without_session() {
        assert_eq!(
            resolve_dashboard::<String>(None, None),
            Landing::Redirect(Redirect::SignIn)
        );
        assert_eq!(
            resolve_dashboard::<String>(None, Some(Ok(Role::Admin))),
            Landing::Redirect(Redirect::SignIn)
        );
    }

    #[rstest]
    #[case(Role::Traveler, "/dashboard/traveler")]
    #[case(Role::LocalGuide, "/dashboard/local_guide")]
    #[case(Role::BusinessOwner, "/dashboard/business_owner")]
    #[case(Role::Admin, "/dashboard/admin")]
    fn dashboard_follows_profile_role(#[case] role: Role, #[case] path: &str) {
        // metadata disagrees on purpose, the profile row wins
        let s = session(Some(Role::Traveler), i64::MAX);

        let landing = resolve_dashboard::<String>(Some(&s), Some(Ok(role)));

        assert_eq!(landing, Landing::Redirect(Redirect::RoleDashboard(role)));
        if let Landing::Redirect(r) = landing {
            assert_eq!(r.path(), path);
        }
    }

    #[test]
    fn dashboard_lookup_pending_or_failed() {
        let s = session(None, i64::MAX);

        assert_eq!(resolve_dashboard::<String>(Some(&s), None), Landing::Stay);
        let missing = "JSON object requested, multiple (or no) rows returned";
        assert_eq!(
            resolve_dashboard(Some(&s), Some(Err(missing))),
            Landing::Failed(missing.to_string())
        );
    }

    #[test]
    fn role_page_guard() {
        let admin = session(Some(Role::Admin), i64::MAX);
        let unknown = session(None, i64::MAX);

        assert_eq!(
            guard_role_page(None, Some(Role::Admin), Role::Admin),
            Landing::Redirect(Redirect::SignIn)
        );
        assert_eq!(
            guard_role_page(Some(&admin), None, Role::Admin),
            Landing::Stay
        );
        assert_eq!(
            guard_role_page(Some(&admin), None, Role::Traveler),
            Landing::Redirect(Redirect::RoleDashboard(Role::Admin))
        );
        assert_eq!(
            guard_role_page(Some(&unknown), None, Role::Traveler),
            Landing::Redirect(Redirect::Dashboard)
        );
        assert_eq!(
            guard_role_page(Some(&unknown), Some(Role::Traveler), Role::Traveler),
            Landing::Stay
        );
        // profile row wins over metadata
        assert_eq!(
            guard_role_page(Some(&admin), Some(Role::LocalGuide), Role::Admin),
            Landing::Redirect(Redirect::RoleDashboard(Role::LocalGuide))
        );
    }

    /// Follows the page decisions from `/dashboard` until one of them stays.
    fn settle(session: &Session, profile_role: Role) -> Vec<String> {
        let mut page = Redirect::Dashboard;
        let mut visited = vec![page.path()];

        for _ in 0..4 {
            let landing = match page {
                Redirect::Dashboard => {
                    resolve_dashboard::<String>(Some(session), Some(Ok(profile_role)))
                }
                Redirect::RoleDashboard(role) => {
                    guard_role_page(Some(session), Some(profile_role), role)
                }
                Redirect::SignIn => Landing::Stay,
            };

            match landing {
                Landing::Redirect(next) => {
                    page = next;
                    visited.push(page.path());
                }
                _ => return visited,
            }
        }

        panic!("no settled page after {visited:?}");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Role::Admin))]
    #[case(Some(Role::Traveler))]
    fn dashboard_settles_on_profile_role(#[case] metadata_role: Option<Role>) {
        let s = session(metadata_role, i64::MAX);

        assert_eq!(settle(&s, Role::Admin), ["/dashboard", "/dashboard/admin"]);
    }
}
