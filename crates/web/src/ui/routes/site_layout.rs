//! SiteLayout - chrome shared by every page

use dioxus::prelude::*;

use crate::presentation::components::{Chatbot, Navbar, NoticeToast};
use crate::presentation::state::NavState;
use crate::use_platform;

use super::Route;

/// Navbar, page outlet, chatbot and notices.
///
/// On every route change the page scrolls to the top, open menus collapse
/// and the tab title follows the route.
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let platform = use_platform();
    let mut nav = use_context::<NavState>();

    use_effect(use_reactive((&route,), move |(route,)| {
        platform.scroll_to_top();
        platform.set_page_title(&route.page_title());
        nav.close_all();
    }));

    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Chatbot {}
        NoticeToast {}
    }
}
