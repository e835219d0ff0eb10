//! Landing page

use dioxus::prelude::*;

use adgorithm_domain::content::home::{
    CLOSING_HEADING, CLOSING_TEXT, DEMO_BRAND_EMAIL, DEMO_INFLUENCER_EMAIL, DEMO_PASSWORD,
    FEATURES_HEADING, FEATURES_INTRO, HERO_HEADLINES, STEPS_HEADING, STEPS_INTRO,
    TESTIMONIALS_HEADING, TRUST_BADGES,
};
use adgorithm_domain::content::{FEATURES, STEPS, TESTIMONIALS};
use adgorithm_domain::Role;

use crate::presentation::components::{FeatureCard, Footer, StepCard, TestimonialCard};
use crate::presentation::state::SessionState;
use crate::routes::Route;
use crate::use_platform;

/// How long each hero headline stays up
const HEADLINE_ROTATION_MS: u64 = 3000;

fn headline(index: usize) -> &'static str {
    HERO_HEADLINES
        .get(index % HERO_HEADLINES.len().max(1))
        .copied()
        .unwrap_or_default()
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            Hero {}

            section {
                id: "features",
                class: "section",
                div {
                    class: "section-header",
                    p { class: "eyebrow", "Features" }
                    h2 { "{FEATURES_HEADING}" }
                    p { "{FEATURES_INTRO}" }
                }
                div {
                    class: "card-grid",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        FeatureCard { key: "{feature.title}", feature: *feature, index }
                    }
                }
            }

            section {
                id: "how-it-works",
                class: "section section-alt",
                div {
                    class: "section-header",
                    p { class: "eyebrow", "HOW IT WORKS" }
                    h2 { "{STEPS_HEADING}" }
                    p { "{STEPS_INTRO}" }
                }
                div {
                    class: "steps",
                    for (index, step) in STEPS.iter().enumerate() {
                        StepCard { key: "{step.title}", step: *step, number: index + 1 }
                    }
                }
            }

            section {
                class: "section",
                div {
                    class: "section-header",
                    h2 { "{TESTIMONIALS_HEADING}" }
                }
                div {
                    class: "card-grid",
                    for testimonial in TESTIMONIALS.iter() {
                        TestimonialCard { key: "{testimonial.author}", testimonial: *testimonial }
                    }
                }
                ul {
                    class: "trust-badges",
                    for badge in TRUST_BADGES {
                        li { key: "{badge}", "{badge}" }
                    }
                }
            }

            section {
                class: "section closing-cta",
                h2 { "{CLOSING_HEADING}" }
                p { "{CLOSING_TEXT}" }
                div {
                    class: "cta-row",
                    Link {
                        to: Route::Register { role: String::new() },
                        class: "button button-primary",
                        "Get Started For Free"
                    }
                    Link { to: Route::About {}, class: "button button-ghost", "Learn more →" }
                }
            }

            Footer {}
            DemoAuthPanel {}
        }
    }
}

#[component]
fn Hero() -> Element {
    let platform = use_platform();
    let mut index = use_signal(|| 0usize);

    // Runs for as long as the page is mounted
    use_hook(move || {
        spawn(async move {
            loop {
                platform.sleep_ms(HEADLINE_ROTATION_MS).await;
                let next = *index.peek() + 1;
                index.set(next);
            }
        })
    });

    let current = headline(index());

    rsx! {
        section {
            class: "hero",
            h1 {
                key: "{current}",
                class: "hero-headline gradient-text",
                "{current}"
            }
            div {
                class: "cta-row",
                Link {
                    to: Route::Register { role: Role::Brand.as_str().to_string() },
                    class: "button button-primary",
                    "Sign Up as a Brand"
                }
                Link {
                    to: Route::Register { role: Role::Influencer.as_str().to_string() },
                    class: "button button-secondary",
                    "Find Campaigns as an Influencer"
                }
            }
        }
    }
}

/// Demo sign-in buttons pinned to the corner of the landing page
#[component]
fn DemoAuthPanel() -> Element {
    let session_state = use_context::<SessionState>();
    let status = match session_state.session.read().role() {
        Some(role) => format!("Logged in as {}", role.as_str()),
        None => "Not logged in".to_string(),
    };

    rsx! {
        aside {
            class: "demo-auth",
            h3 { "Test Authentication" }
            p { "Status: {status}" }
            button {
                class: "button button-small",
                onclick: {
                    let mut session_state = session_state.clone();
                    move |_| {
                        session_state.login_as(DEMO_BRAND_EMAIL, DEMO_PASSWORD, Role::Brand);
                    }
                },
                "Login as Brand"
            }
            button {
                class: "button button-small",
                onclick: {
                    let mut session_state = session_state.clone();
                    move |_| {
                        session_state.login_as(DEMO_INFLUENCER_EMAIL, DEMO_PASSWORD, Role::Influencer);
                    }
                },
                "Login as Influencer"
            }
            button {
                class: "button button-small",
                onclick: {
                    let mut session_state = session_state.clone();
                    move |_| session_state.logout()
                },
                "Logout"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_wraps_around() {
        assert_eq!(headline(0), HERO_HEADLINES[0]);
        assert_eq!(headline(HERO_HEADLINES.len()), HERO_HEADLINES[0]);
        assert_eq!(headline(HERO_HEADLINES.len() + 1), HERO_HEADLINES[1]);
    }
}
