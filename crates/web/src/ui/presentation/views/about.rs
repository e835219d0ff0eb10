use dioxus::prelude::*;

use adgorithm_domain::content::about::{
    ABOUT_SECTIONS, COMMITMENTS, COMMITMENT_HEADING, COMMITMENT_TEXT, PLACEHOLDER_SUBTITLE,
    PLACEHOLDER_TITLE, SECTION_BODY,
};
use adgorithm_domain::content::about_section;

use crate::routes::Route;

/// `/about`: placeholder banner with links to every section
#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "about",
            Placeholder {}
            div {
                class: "card-grid",
                for section in ABOUT_SECTIONS {
                    Link {
                        key: "{section.slug}",
                        to: Route::AboutSection { section: section.slug.to_string() },
                        class: "card about-card",
                        h3 { "{section.title}" }
                        p { "{section.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection(section: String) -> Element {
    let Some(found) = about_section(&section) else {
        tracing::debug!(slug = %section, "Unknown about section");
        return rsx! {
            div { class: "about", Placeholder {} }
        };
    };

    rsx! {
        article {
            class: "about about-section",
            Link { to: Route::About {}, class: "policy-back", "← About Us" }
            h1 { class: "gradient-text", "{found.title}" }
            p { class: "lead", "{found.description}" }
            for paragraph in SECTION_BODY {
                p { key: "{paragraph}", "{paragraph}" }
            }
            section {
                class: "card commitment",
                h2 { "{COMMITMENT_HEADING}" }
                p { "{COMMITMENT_TEXT}" }
                ul {
                    for item in COMMITMENTS {
                        li { key: "{item}", "{item}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Placeholder() -> Element {
    rsx! {
        div {
            class: "placeholder",
            h1 { "{PLACEHOLDER_TITLE}" }
            p { "{PLACEHOLDER_SUBTITLE}" }
        }
    }
}
