use dioxus::prelude::*;

use crate::presentation::state::NoticeState;

/// The current notice, if any; click to dismiss early
#[component]
pub fn NoticeToast() -> Element {
    let mut notices = use_context::<NoticeState>();
    let current = notices.current.read().clone();

    rsx! {
        {current.map(|notice| rsx! {
            div {
                key: "{notice.id}",
                class: "toast",
                role: "status",
                onclick: move |_| notices.dismiss(),
                "{notice.text}"
            }
        })}
    }
}
