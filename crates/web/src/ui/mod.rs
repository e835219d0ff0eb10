use crate::ports::outbound::{storage_keys, PlatformPort, PAGE_SCROLL_ID};
use adgorithm_domain::ChatTimings;
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::state::{ChatState, NavState, NoticeState, SessionState, ThemeState};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/web/src/runner.rs`).
    let shell = use_context::<ShellKind>();
    let platform = use_platform();
    let timings = use_context::<ChatTimings>();

    // These must be created inside an active Dioxus runtime.
    let session_state = use_context_provider({
        let platform = platform.clone();
        move || SessionState::new(platform)
    });
    let theme_state = use_context_provider(ThemeState::new);
    use_context_provider(NavState::new);
    use_context_provider(NoticeState::new);
    let mut chat_state = use_context_provider(move || ChatState::new(timings));

    use_storage_watch(platform, session_state.clone());

    // Keep an open chatbot conversation in step with login/logout
    let session = session_state.session;
    use_effect(move || {
        let current = session.read().clone();
        chat_state.session_changed(&current);
    });

    let theme_class = theme_state.theme.read().class();

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        div {
            class: "app {theme_class}",
            {
                match shell {
                    ShellKind::Desktop => rsx! {
                        DesktopShell {
                            Router::<routes::Route> {}
                        }
                    },
                    ShellKind::Mobile => rsx! {
                        MobileShell {
                            Router::<routes::Route> {}
                        }
                    },
                }
            }
        }
    }
}

/// Re-read the session whenever another window touches the auth markers
fn use_storage_watch(platform: Platform, mut session_state: SessionState) {
    use_hook(move || {
        spawn(async move {
            let mut changes = platform.storage_changes();
            while let Some(key) = changes.next().await {
                // An empty key means the whole storage was cleared
                if key.is_empty() || storage_keys::SESSION_KEYS.contains(&key.as_str()) {
                    session_state.refresh_from_storage();
                }
            }
            tracing::debug!("Storage change stream ended");
        })
    });
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            id: PAGE_SCROLL_ID,
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Same routes; the stylesheet switches navbar and policy pages to
        // their compact layouts under `.shell-mobile`.
        div {
            id: PAGE_SCROLL_ID,
            class: "shell shell-mobile",
            {children}
        }
    }
}
