use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "No route matched");

    rsx! {
        div {
            class: "placeholder",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "button button-primary", "Back to Home" }
        }
    }
}
