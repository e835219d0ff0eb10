//! Top navigation bar
//!
//! Logo, search box, Features and Resources dropdowns, About link, theme
//! toggle, privacy shortcut and the account menu. Below the `md` breakpoint
//! the same entries collapse into a disclosure panel.

use dioxus::prelude::*;

use adgorithm_domain::content::home::{COMING_SOON_TEXT, COMING_SOON_TITLE, FEATURES};
use adgorithm_domain::Session;

use crate::presentation::state::notice_state::SEARCH_COMING_SOON;
use crate::presentation::state::{NavMenu, NavState, NoticeState, SessionState, ThemeState};
use crate::routes::Route;
use crate::use_platform;

#[component]
pub fn Navbar() -> Element {
    let mut nav = use_context::<NavState>();
    let mobile_open = *nav.mobile_open.read();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",

                Link {
                    to: Route::Home {},
                    class: "logo gradient-text",
                    "adgorithm"
                }

                div {
                    class: "navbar-search desktop-only",
                    SearchBox {}
                }

                div {
                    class: "navbar-links desktop-only",
                    FeaturesMenu {}
                    ResourcesMenu {}
                    Link {
                        to: Route::About {},
                        class: "nav-link",
                        "About Us"
                    }
                    ThemeToggle {}
                    PrivacyShortcut {}
                    AccountArea {}
                }

                div {
                    class: "navbar-mobile-actions mobile-only",
                    PrivacyShortcut {}
                    button {
                        class: "icon-button",
                        r#type: "button",
                        aria_label: "Open main menu",
                        aria_expanded: "{mobile_open}",
                        onclick: move |_| nav.toggle_mobile(),
                        if mobile_open { "✕" } else { "☰" }
                    }
                }
            }

            if mobile_open {
                MobilePanel {}
            }
        }
    }
}

/// "Search influencers..." box; submitting only shows a notice
#[component]
fn SearchBox() -> Element {
    let platform = use_platform();
    let nav = use_context::<NavState>();
    let mut notices = use_context::<NoticeState>();
    let mut search = nav.search;

    let mut submit = move || notices.show(platform.clone(), SEARCH_COMING_SOON);

    rsx! {
        form {
            class: "search-box",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit();
            },
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search influencers...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            button {
                class: "search-button",
                r#type: "submit",
                aria_label: "Search",
                "⌕"
            }
        }
    }
}

#[component]
fn FeaturesMenu() -> Element {
    let mut nav = use_context::<NavState>();
    let open = *nav.open_menu.read() == Some(NavMenu::Features);
    let expanded = *nav.expanded_feature.read();

    rsx! {
        div {
            class: "dropdown",
            button {
                class: if open { "nav-link dropdown-toggle open" } else { "nav-link dropdown-toggle" },
                r#type: "button",
                onclick: move |_| nav.toggle_menu(NavMenu::Features),
                "Features"
                span { class: "chevron", "▾" }
            }
            if open {
                div {
                    class: "dropdown-panel",
                    for feature in FEATURES.iter() {
                        FeatureMenuItem {
                            key: "{feature.title}",
                            title: feature.title,
                            expanded: expanded == Some(feature.title),
                        }
                    }
                }
            }
        }
    }
}

/// One entry in the Features dropdown; clicking reveals the "Coming Soon" note
#[component]
fn FeatureMenuItem(title: &'static str, expanded: bool) -> Element {
    let mut nav = use_context::<NavState>();

    rsx! {
        button {
            class: if expanded { "dropdown-item expanded" } else { "dropdown-item" },
            r#type: "button",
            onclick: move |_| nav.expand_feature(title),
            span { class: "dropdown-item-title", "{title}" }
            if expanded {
                ComingSoon {}
            }
        }
    }
}

#[component]
fn ResourcesMenu() -> Element {
    let mut nav = use_context::<NavState>();
    let open = *nav.open_menu.read() == Some(NavMenu::Resources);

    rsx! {
        div {
            class: "dropdown",
            button {
                class: if open { "nav-link dropdown-toggle open" } else { "nav-link dropdown-toggle" },
                r#type: "button",
                onclick: move |_| nav.toggle_menu(NavMenu::Resources),
                "Resources"
                span { class: "chevron", "▾" }
            }
            if open {
                div {
                    class: "dropdown-panel",
                    ComingSoon {}
                }
            }
        }
    }
}

#[component]
fn ComingSoon() -> Element {
    rsx! {
        div {
            class: "coming-soon",
            p { class: "coming-soon-title", "{COMING_SOON_TITLE}" }
            p { class: "coming-soon-text", "{COMING_SOON_TEXT}" }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme_state = use_context::<ThemeState>();
    let theme = *theme_state.theme.read();
    let theme_class = theme.class();

    rsx! {
        button {
            class: "theme-toggle {theme_class}",
            r#type: "button",
            aria_label: theme.toggle_label(),
            title: theme.toggle_label(),
            onclick: move |_| theme_state.toggle(),
            span { class: "theme-toggle-knob" }
        }
    }
}

#[component]
fn PrivacyShortcut() -> Element {
    rsx! {
        Link {
            to: Route::PrivacyPolicy {},
            class: "icon-button",
            aria_label: "Privacy Policy",
            "?"
        }
    }
}

/// Sign in / Get started, or the avatar menu when signed in
#[component]
fn AccountArea() -> Element {
    let session_state = use_context::<SessionState>();
    let mut nav = use_context::<NavState>();
    let session = session_state.session.read().clone();
    let open = *nav.open_menu.read() == Some(NavMenu::Account);

    match session {
        Session::LoggedOut => rsx! {
            Link { to: Route::Login {}, class: "nav-link", "Sign in" }
            Link {
                to: Route::Register { role: String::new() },
                class: "button button-primary",
                "Get started"
            }
        },
        Session::LoggedIn(identity) => {
            let role_name = identity.role.display_name();
            rsx! {
                div {
                    class: "dropdown",
                    button {
                        class: "avatar-button",
                        r#type: "button",
                        aria_label: "Open user menu",
                        onclick: move |_| nav.toggle_menu(NavMenu::Account),
                        Avatar { initials: identity.initials(), url: identity.avatar_url.clone() }
                    }
                    if open {
                        div {
                            class: "dropdown-panel dropdown-panel-right account-panel",
                            div {
                                class: "account-summary",
                                p { class: "account-name", "{identity.display_name}" }
                                p { class: "account-email", "{identity.email}" }
                            }
                            dl {
                                class: "account-facts",
                                dt { "Role" }
                                dd { "{role_name}" }
                                dt { "Status" }
                                dd { class: "status-active", "Active" }
                            }
                            AccountLinks {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Avatar(initials: String, #[props(!optional)] url: Option<String>) -> Element {
    match url {
        Some(url) => rsx! {
            img { class: "avatar", src: "{url}", alt: "" }
        },
        None => rsx! {
            span { class: "avatar avatar-initials", "{initials}" }
        },
    }
}

/// Profile, Settings, Sign out
#[component]
fn AccountLinks() -> Element {
    let mut session_state = use_context::<SessionState>();
    let navigator = use_navigator();

    rsx! {
        Link { to: Route::Profile {}, class: "dropdown-item", "Your Profile" }
        Link { to: Route::Settings {}, class: "dropdown-item", "Settings" }
        button {
            class: "dropdown-item",
            r#type: "button",
            onclick: move |_| {
                session_state.logout();
                navigator.push(Route::Home {});
            },
            "Sign out"
        }
    }
}

/// Disclosure panel for narrow screens
#[component]
fn MobilePanel() -> Element {
    let session_state = use_context::<SessionState>();
    let mut nav = use_context::<NavState>();
    let features_open = *nav.open_menu.read() == Some(NavMenu::Features);
    let resources_open = *nav.open_menu.read() == Some(NavMenu::Resources);
    let expanded = *nav.expanded_feature.read();
    let session = session_state.session.read().clone();

    rsx! {
        div {
            class: "mobile-panel mobile-only",
            SearchBox {}

            button {
                class: "mobile-link",
                r#type: "button",
                onclick: move |_| nav.toggle_menu(NavMenu::Features),
                "Features"
            }
            if features_open {
                div {
                    class: "mobile-submenu",
                    for feature in FEATURES.iter() {
                        FeatureMenuItem {
                            key: "{feature.title}",
                            title: feature.title,
                            expanded: expanded == Some(feature.title),
                        }
                    }
                }
            }

            button {
                class: "mobile-link",
                r#type: "button",
                onclick: move |_| nav.toggle_menu(NavMenu::Resources),
                "Resources"
            }
            if resources_open {
                div { class: "mobile-submenu", ComingSoon {} }
            }

            Link { to: Route::About {}, class: "mobile-link", "About Us" }

            div {
                class: "mobile-row",
                span { "Theme" }
                ThemeToggle {}
            }

            {match session {
                Session::LoggedIn(identity) => rsx! {
                    div {
                        class: "account-summary",
                        p { class: "account-name", "{identity.display_name}" }
                        p { class: "account-email", "{identity.email}" }
                    }
                    AccountLinks {}
                },
                Session::LoggedOut => rsx! {
                    Link { to: Route::Login {}, class: "mobile-link", "Sign in" }
                    Link {
                        to: Route::Register { role: String::new() },
                        class: "button button-primary",
                        "Get started"
                    }
                },
            }}
        }
    }
}
