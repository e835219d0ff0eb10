//! Links between the three legal documents
//!
//! A sidebar next to the document on wide screens, a pill bar above it on
//! narrow ones. The stylesheet picks one per shell.

use dioxus::prelude::*;

use adgorithm_domain::content::legal::SUPPORT_EMAIL;
use adgorithm_domain::content::PolicyKind;

use crate::routes::Route;

#[component]
pub fn PolicySidebar(current: PolicyKind) -> Element {
    rsx! {
        aside {
            class: "policy-sidebar",
            Link { to: Route::Home {}, class: "policy-back", "← Back to Home" }
            nav {
                class: "policy-links",
                for kind in PolicyKind::all().iter().copied() {
                    Link {
                        key: "{kind.label()}",
                        to: Route::from(kind),
                        class: if kind == current { "policy-link current" } else { "policy-link" },
                        "{kind.label()}"
                    }
                }
            }
            a {
                class: "policy-help",
                href: "mailto:{SUPPORT_EMAIL}",
                "Need Help?"
            }
        }
    }
}

#[component]
pub fn PolicyPills(current: PolicyKind) -> Element {
    rsx! {
        nav {
            class: "policy-pills",
            for kind in PolicyKind::all().iter().copied() {
                Link {
                    key: "{kind.label()}",
                    to: Route::from(kind),
                    class: if kind == current { "pill current" } else { "pill" },
                    "{kind.label()}"
                }
            }
        }
    }
}
