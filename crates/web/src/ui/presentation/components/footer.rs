//! Landing page footer

use dioxus::prelude::*;

use adgorithm_domain::content::home::{
    COPYRIGHT, NEWSLETTER_TEXT, SOCIAL_LINKS, SOLUTION_LINKS, SUPPORT_LINKS, TAGLINE,
};

use crate::presentation::state::notice_state::NEWSLETTER_COMING_SOON;
use crate::presentation::state::NoticeState;
use crate::use_platform;

#[component]
pub fn Footer() -> Element {
    let platform = use_platform();
    let mut notices = use_context::<NoticeState>();
    let mut email = use_signal(String::new);

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "footer-grid",
                div {
                    h3 { class: "logo gradient-text", "adgorithm" }
                    p { "{TAGLINE}" }
                    ul {
                        class: "social-links",
                        for link in SOCIAL_LINKS {
                            li {
                                key: "{link.label}",
                                a {
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
                FooterColumn { heading: "Solutions", items: SOLUTION_LINKS }
                FooterColumn { heading: "Support", items: SUPPORT_LINKS }
                div {
                    h4 { "Stay Updated" }
                    p { "{NEWSLETTER_TEXT}" }
                    form {
                        class: "newsletter",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            notices.show(platform.clone(), NEWSLETTER_COMING_SOON);
                        },
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        button { class: "button button-primary", r#type: "submit", "Subscribe" }
                    }
                }
            }
            p { class: "copyright", "{COPYRIGHT}" }
        }
    }
}

#[component]
fn FooterColumn(heading: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        div {
            h4 { "{heading}" }
            ul {
                for item in items {
                    li { key: "{item}", a { href: "#", "{item}" } }
                }
            }
        }
    }
}
