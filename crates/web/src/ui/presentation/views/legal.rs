//! Policy hub and the three legal documents

use dioxus::prelude::*;

use adgorithm_domain::content::legal::{
    POLICY_HUB_INTRO, POLICY_HUB_TITLE, POSTAL_ADDRESS, SUPPORT_EMAIL,
};
use adgorithm_domain::content::{LegalBlock, LegalText, PolicyKind};

use crate::presentation::components::{PolicyPills, PolicySidebar};
use crate::routes::Route;

#[component]
pub fn Policies() -> Element {
    rsx! {
        div {
            class: "policies",
            h1 { class: "gradient-text", "{POLICY_HUB_TITLE}" }
            p { class: "lead", "{POLICY_HUB_INTRO}" }
            div {
                class: "card-grid",
                for kind in PolicyKind::all().iter().copied() {
                    Link {
                        key: "{kind.label()}",
                        to: Route::from(kind),
                        class: "card policy-card",
                        h2 { "{kind.label()}" }
                        p { "{kind.summary()}" }
                    }
                }
            }
            a { class: "policy-help", href: "mailto:{SUPPORT_EMAIL}", "Need Help?" }
        }
    }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! { LegalPage { kind: PolicyKind::Privacy } }
}

#[component]
pub fn TermsOfService() -> Element {
    rsx! { LegalPage { kind: PolicyKind::Terms } }
}

#[component]
pub fn CookiePolicy() -> Element {
    rsx! { LegalPage { kind: PolicyKind::Cookies } }
}

#[component]
fn LegalPage(kind: PolicyKind) -> Element {
    let document = kind.document();
    let updated = document.last_updated_label();

    rsx! {
        div {
            class: "legal-layout",
            PolicySidebar { current: kind }
            article {
                class: "legal-document",
                PolicyPills { current: kind }
                h1 { "{document.title()}" }
                p { class: "muted", "{updated}" }
                for part in document.sections {
                    section {
                        key: "{part.heading}",
                        h2 { "{part.heading}" }
                        for (index, block) in part.blocks.iter().enumerate() {
                            {match block {
                                LegalBlock::Paragraph(text) => rsx! {
                                    p { key: "{index}", LegalLine { text: *text } }
                                },
                                LegalBlock::Bullets(items) => rsx! {
                                    ul {
                                        key: "{index}",
                                        for item in items.iter() {
                                            li { key: "{item.text}", LegalLine { text: *item } }
                                        }
                                    }
                                },
                            }}
                        }
                    }
                }
                address {
                    class: "legal-contact",
                    a { href: "mailto:{document.contact_email}", "{document.contact_email}" }
                    br {}
                    "{POSTAL_ADDRESS}"
                }
            }
        }
    }
}

/// Optional bold lead-in, the text, then an optional external link
#[component]
fn LegalLine(text: LegalText) -> Element {
    rsx! {
        {text.lead.map(|lead| rsx! { strong { "{lead} " } })}
        "{text.text}"
        {text.link.map(|link| rsx! {
            " "
            a {
                href: link.href,
                target: "_blank",
                rel: "noopener noreferrer",
                "{link.label}"
            }
        })}
    }
}
