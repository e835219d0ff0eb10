//! Landing page cards

use dioxus::prelude::*;

use adgorithm_domain::content::{Feature, Step, Testimonial};

#[component]
pub fn FeatureCard(feature: Feature, index: usize) -> Element {
    rsx! {
        article {
            class: "feature-card",
            style: "animation-delay: {index * 100}ms",
            div { class: "feature-icon", "{index + 1}" }
            h3 { "{feature.title}" }
            p { "{feature.description}" }
        }
    }
}

/// How-it-works step with its number, highlights and caption
#[component]
pub fn StepCard(step: Step, number: usize) -> Element {
    rsx! {
        article {
            class: "step-card",
            span { class: "step-number", "{number}" }
            div {
                class: "step-text",
                h3 { "{step.title}" }
                p { "{step.description}" }
                ul {
                    class: "step-highlights",
                    for highlight in step.highlights {
                        li { key: "{highlight}", "✓ {highlight}" }
                    }
                }
            }
            p { class: "step-caption", "{step.caption}" }
        }
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        figure {
            class: "testimonial-card",
            blockquote { "“{testimonial.quote}”" }
            figcaption {
                img {
                    class: "avatar",
                    src: testimonial.avatar_url,
                    alt: testimonial.author,
                }
                div {
                    p { class: "testimonial-author", "{testimonial.author}" }
                    p { class: "testimonial-role", "{testimonial.role}" }
                }
            }
        }
    }
}
