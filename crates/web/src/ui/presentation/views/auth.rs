//! Sign-in and registration forms
//!
//! Both forms hand their input to [`SessionState`] and move on to the
//! dashboard when it accepts. A rejected submit leaves the visitor on the
//! form with `last_error` shown above the fields.

use dioxus::prelude::*;

use adgorithm_domain::Role;

use crate::presentation::state::notice_state::PASSWORD_RESET_UNAVAILABLE;
use crate::presentation::state::{NoticeState, SessionState};
use crate::routes::Route;
use crate::use_platform;

/// Role preselected by `/register?role=..`; anything unrecognised means Brand
fn preselected_role(query: &str) -> Role {
    query.parse().unwrap_or_default()
}

#[component]
pub fn Login() -> Element {
    let mut session_state = use_context::<SessionState>();
    let mut notices = use_context::<NoticeState>();
    let platform = use_platform();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);

    // Errors belong to the submit that caused them
    use_drop({
        let mut session_state = session_state.clone();
        move || session_state.clear_error()
    });

    let error = session_state.last_error.read().clone();
    let password_type = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-header",
                h2 { "Sign in to your account" }
                p {
                    "Or "
                    Link { to: Route::Register { role: String::new() }, "create a new account" }
                }
            }
            form {
                class: "auth-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if session_state.login(&email.read(), &password.read()) {
                        navigator.push(Route::Dashboard {});
                    }
                },
                {error.map(|message| rsx! {
                    div { class: "form-error", role: "alert", "{message}" }
                })}
                label {
                    r#for: "email",
                    "Email address"
                }
                input {
                    id: "email",
                    r#type: "email",
                    autocomplete: "email",
                    placeholder: "Enter your email address",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                label {
                    r#for: "password",
                    "Password"
                }
                div {
                    class: "password-field",
                    input {
                        id: "password",
                        r#type: password_type,
                        autocomplete: "current-password",
                        placeholder: "Enter your password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        r#type: "button",
                        class: "button button-ghost button-small",
                        onclick: move |_| show_password.toggle(),
                        "{toggle_label}"
                    }
                }
                div {
                    class: "auth-row",
                    label {
                        class: "checkbox",
                        input { r#type: "checkbox", name: "remember-me" }
                        "Remember me"
                    }
                    button {
                        r#type: "button",
                        class: "link-button",
                        onclick: move |_| notices.show(platform.clone(), PASSWORD_RESET_UNAVAILABLE),
                        "Forgot your password?"
                    }
                }
                button { r#type: "submit", class: "button button-primary button-block", "Sign in" }
            }
        }
    }
}

#[component]
pub fn Register(role: String) -> Element {
    let mut session_state = use_context::<SessionState>();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut selected = use_signal(|| preselected_role(&role));

    // Follow the query when the visitor switches between the two hero links
    use_effect(use_reactive((&role,), move |(role,)| {
        selected.set(preselected_role(&role));
    }));

    use_drop({
        let mut session_state = session_state.clone();
        move || session_state.clear_error()
    });

    let error = session_state.last_error.read().clone();
    let current = selected();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-header",
                h2 { "Create your account" }
                p {
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
            form {
                class: "auth-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let accepted = session_state.register(
                        &name.read(),
                        &email.read(),
                        &password.read(),
                        selected(),
                    );
                    if accepted {
                        navigator.push(Route::Dashboard {});
                    }
                },
                {error.map(|message| rsx! {
                    div { class: "form-error", role: "alert", "{message}" }
                })}
                label { r#for: "name", "Full name" }
                input {
                    id: "name",
                    autocomplete: "name",
                    placeholder: "Enter your name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                label { r#for: "email", "Email address" }
                input {
                    id: "email",
                    r#type: "email",
                    autocomplete: "email",
                    placeholder: "Enter your email address",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    autocomplete: "new-password",
                    placeholder: "Choose a password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                label { r#for: "role", "I am a" }
                select {
                    id: "role",
                    value: current.as_str(),
                    onchange: move |e| selected.set(preselected_role(&e.value())),
                    for option_role in Role::all().iter().copied() {
                        option {
                            key: "{option_role.as_str()}",
                            value: option_role.as_str(),
                            selected: option_role == current,
                            "{option_role.display_name()}"
                        }
                    }
                }
                button { r#type: "submit", class: "button button-primary button-block", "Create account" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preselected_role_from_query() {
        assert_eq!(preselected_role("influencer"), Role::Influencer);
        assert_eq!(preselected_role("brand"), Role::Brand);
        assert_eq!(preselected_role(""), Role::Brand);
        assert_eq!(preselected_role("agency"), Role::Brand);
    }
}
