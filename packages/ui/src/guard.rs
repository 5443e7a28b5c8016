//! Route access rules.
//!
//! The decision is a pure function of the route's [`RouteAccess`] and the
//! current [`Session`]. [`use_route_guard`] applies it inside a layout: the
//! platform's `Route` enum maps each [`Destination`] onto a route, and the
//! redirect runs as an effect with a history-replacing navigation.

use dioxus::prelude::*;

use crate::session::Session;
use crate::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Rendered for everyone.
    Public,
    /// Only for visitors without a session (sign-in, sign-up).
    PublicOnly,
    /// Only for signed-in users (dashboard).
    Protected,
}

/// Where a guard sends a visitor it refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    SignIn,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Destination),
}

pub fn route_guard(access: RouteAccess, session: &Session) -> GuardDecision {
    match (access, session.is_authenticated()) {
        (RouteAccess::Protected, false) => GuardDecision::Redirect(Destination::SignIn),
        (RouteAccess::PublicOnly, true) => GuardDecision::Redirect(Destination::Dashboard),
        _ => GuardDecision::Render,
    }
}

/// Guard the calling layout. Returns whether its outlet may render.
///
/// Reads the session during render, so the layout re-evaluates on sign-in
/// and sign-out; a refused visitor is redirected once the render commits.
pub fn use_route_guard<R>(access: RouteAccess) -> bool
where
    R: Routable + From<Destination>,
{
    let session = use_session();
    let nav = use_navigator();

    let watched = session.clone();
    use_effect(move || {
        if let GuardDecision::Redirect(to) = route_guard(access, &watched.snapshot()) {
            tracing::debug!(?access, ?to, "Route refused, redirecting");
            nav.replace(R::from(to));
        }
    });

    route_guard(access, &session.snapshot()) == GuardDecision::Render
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn signed_in() -> Session {
        Session {
            user: Some(User {
                id: None,
                name: Some("Ada".to_string()),
                email: "ada@acme.test".to_string(),
                created_at: None,
                updated_at: None,
            }),
            access_token: Some("a".to_string()),
            refresh_token: Some("r".to_string()),
            is_loading: false,
        }
    }

    #[test]
    fn test_anonymous_visitor() {
        let session = Session::default();
        assert_eq!(route_guard(RouteAccess::Public, &session), GuardDecision::Render);
        assert_eq!(route_guard(RouteAccess::PublicOnly, &session), GuardDecision::Render);
        assert_eq!(
            route_guard(RouteAccess::Protected, &session),
            GuardDecision::Redirect(Destination::SignIn)
        );
    }

    #[test]
    fn test_signed_in_user() {
        let session = signed_in();
        assert_eq!(route_guard(RouteAccess::Public, &session), GuardDecision::Render);
        assert_eq!(route_guard(RouteAccess::Protected, &session), GuardDecision::Render);
        assert_eq!(
            route_guard(RouteAccess::PublicOnly, &session),
            GuardDecision::Redirect(Destination::Dashboard)
        );
    }

    #[test]
    fn test_token_without_user_is_anonymous() {
        let session = Session {
            user: None,
            ..signed_in()
        };
        assert_eq!(
            route_guard(RouteAccess::Protected, &session),
            GuardDecision::Redirect(Destination::SignIn)
        );
    }

    #[test]
    fn test_loading_does_not_change_decision() {
        let session = Session {
            is_loading: true,
            ..Session::default()
        };
        assert_eq!(route_guard(RouteAccess::PublicOnly, &session), GuardDecision::Render);
    }
}
