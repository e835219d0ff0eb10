//! RequireSession - guard layout for the workspace pages

use dioxus::prelude::*;

use crate::presentation::state::SessionState;

use super::{access_for, Access, Route};

/// Renders the nested page only for a signed-in visitor; anyone else is
/// sent to the login page, replacing the history entry.
#[component]
pub fn RequireSession() -> Element {
    let session_state = use_context::<SessionState>();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let access = access_for(&route, &session_state.session.read());

    use_effect(use_reactive((&access,), move |(access,)| {
        if access == Access::RedirectToLogin {
            tracing::debug!("No session; redirecting to login");
            navigator.replace(Route::Login {});
        }
    }));

    match access {
        Access::Render => rsx! {
            Outlet::<Route> {}
        },
        Access::RedirectToLogin => rsx! {},
    }
}
