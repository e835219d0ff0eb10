//! Avni, the scripted support assistant
//!
//! A floating launcher plus the conversation panel. All transitions go
//! through [`ChatState`]; this module only renders the current screen.

use dioxus::prelude::*;

use adgorithm_domain::{ChatAction, Role, Screen, TopicEntry, TranscriptLine};

use crate::presentation::state::{ChatState, SessionState};
use crate::use_platform;

#[component]
pub fn Chatbot() -> Element {
    let mut chat = use_context::<ChatState>();
    let session_state = use_context::<SessionState>();
    let open = chat.is_open();

    rsx! {
        div {
            class: "chatbot",
            if open {
                ChatPanel {}
            }
            button {
                class: "chatbot-launcher",
                r#type: "button",
                aria_label: if open { "Close chat" } else { "Open chat" },
                onclick: move |_| {
                    let session = session_state.session.peek().clone();
                    chat.toggle(&session);
                },
                if open { "✕" } else { "💬" }
            }
        }
    }
}

#[component]
fn ChatPanel() -> Element {
    let mut chat = use_context::<ChatState>();
    let widget = chat.widget.read();
    let Some(conversation) = widget.conversation() else {
        return rsx! {};
    };

    let screen = conversation.screen();
    let transcript: Vec<TranscriptLine> = conversation.transcript().to_vec();
    let typing = conversation.is_typing();
    let topics = conversation.offered_topics();
    drop(widget);

    let show_transcript = !matches!(screen, Screen::Initial) || !transcript.is_empty();
    let search_role = match screen {
        Screen::Search { role } => Some(role),
        _ => None,
    };

    rsx! {
        section {
            class: "chat-panel",
            aria_label: "Support chat",
            header {
                class: "chat-header",
                div {
                    class: "chat-avatar",
                    "A"
                }
                div {
                    h3 { "Avni" }
                    p { class: "chat-subtitle", "Virtual Assistant" }
                }
                button {
                    class: "icon-button chat-close",
                    r#type: "button",
                    aria_label: "Close chat",
                    onclick: move |_| chat.close(),
                    "✕"
                }
            }

            div {
                class: "chat-body",
                if matches!(screen, Screen::Initial) {
                    ParticipantPicker {}
                }
                {search_role.map(|role| rsx! { SearchBox { role } })}
                if show_transcript {
                    Transcript { lines: transcript, typing }
                }
            }

            {match screen {
                Screen::QuerySelection { .. } => rsx! {
                    TopicList {
                        heading: "Select your query:",
                        topics,
                        not_listed_label: "My question isn't listed here",
                    }
                },
                Screen::NotResolved { .. } => rsx! {
                    TopicList {
                        heading: "Here are some more specific queries:",
                        topics,
                        not_listed_label: "I still need help with something else",
                    }
                },
                Screen::Resolved { .. } if !typing => rsx! {
                    ResolutionButtons {}
                },
                Screen::Chat { .. } => rsx! {
                    MessageBox {}
                },
                _ => rsx! {},
            }}
        }
    }
}

#[component]
fn ParticipantPicker() -> Element {
    let platform = use_platform();
    let mut chat = use_context::<ChatState>();
    let platform_for_influencer = platform.clone();

    rsx! {
        div {
            class: "chat-intro",
            h3 { "Hello there! 👋" }
            p { "Please tell me who you are so I can help you better:" }
            div {
                class: "chat-choice-row",
                button {
                    class: "button button-primary",
                    r#type: "button",
                    onclick: move |_| chat.dispatch(platform.clone(), ChatAction::ChooseParticipant(Role::Brand)),
                    "I'm a Brand"
                }
                button {
                    class: "button button-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        chat.dispatch(
                            platform_for_influencer.clone(),
                            ChatAction::ChooseParticipant(Role::Influencer),
                        )
                    },
                    "I'm an Influencer"
                }
            }
        }
    }
}

/// Signed-in shortcut: look for the other side of the marketplace
#[component]
fn SearchBox(role: Role) -> Element {
    let platform = use_platform();
    let mut chat = use_context::<ChatState>();
    let mut query = chat.search_input;
    let blank = query.read().trim().is_empty();

    let (heading, blurb) = match role {
        Role::Brand => ("Find Influencers", "Search for influencers that match your brand"),
        Role::Influencer => ("Discover Brands", "Find brands looking for collaborations"),
    };
    let placeholder = format!("Search {}...", role.counterpart_plural());

    rsx! {
        div {
            class: "chat-search",
            h3 { "{heading}" }
            p { "{blurb}" }
            form {
                class: "chat-input-row",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    chat.submit_search(platform.clone());
                },
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: blank,
                    "Search"
                }
            }
        }
    }
}

#[component]
fn Transcript(lines: Vec<TranscriptLine>, typing: bool) -> Element {
    rsx! {
        ol {
            class: "chat-transcript",
            for (index, line) in lines.iter().enumerate() {
                li {
                    key: "{index}",
                    class: if line.is_from_assistant() { "chat-line from-assistant" } else { "chat-line from-visitor" },
                    p { class: "chat-bubble", "{line.text}" }
                }
            }
            if typing {
                li {
                    class: "chat-line from-assistant",
                    aria_label: "Avni is typing",
                    span { class: "typing-indicator", span {} span {} span {} }
                }
            }
        }
    }
}

#[component]
fn TopicList(
    heading: &'static str,
    topics: &'static [TopicEntry],
    not_listed_label: &'static str,
) -> Element {
    let platform = use_platform();
    let mut chat = use_context::<ChatState>();
    let platform_for_not_listed = platform.clone();

    rsx! {
        div {
            class: "chat-options",
            p { class: "chat-options-heading", "{heading}" }
            div {
                class: "chat-option-list",
                for topic in topics.iter() {
                    button {
                        key: "{topic.id}",
                        class: "chat-option",
                        r#type: "button",
                        onclick: {
                            let platform = platform.clone();
                            move |_| chat.dispatch(platform.clone(), ChatAction::PickTopic(topic.id.to_string()))
                        },
                        "{topic.prompt}"
                    }
                }
            }
            button {
                class: "chat-option chat-option-accent",
                r#type: "button",
                onclick: move |_| chat.dispatch(platform_for_not_listed.clone(), ChatAction::NotListed),
                "{not_listed_label}"
            }
        }
    }
}

#[component]
fn ResolutionButtons() -> Element {
    let platform = use_platform();
    let mut chat = use_context::<ChatState>();
    let platform_for_deny = platform.clone();

    rsx! {
        div {
            class: "chat-options",
            p { class: "chat-options-heading", "Was your query resolved?" }
            div {
                class: "chat-choice-row",
                button {
                    class: "button button-primary",
                    r#type: "button",
                    onclick: move |_| chat.dispatch(platform.clone(), ChatAction::ConfirmSolved),
                    "Yes, thank you!"
                }
                button {
                    class: "button button-secondary",
                    r#type: "button",
                    onclick: move |_| chat.dispatch(platform_for_deny.clone(), ChatAction::DenySolved),
                    "No, I need more help"
                }
            }
        }
    }
}

#[component]
fn MessageBox() -> Element {
    let platform = use_platform();
    let mut chat = use_context::<ChatState>();
    let mut message = chat.message_input;
    let blank = message.read().trim().is_empty();

    rsx! {
        form {
            class: "chat-input-row chat-footer",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                chat.submit_message(platform.clone());
            },
            input {
                r#type: "text",
                placeholder: "Type your message here...",
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }
            button {
                class: "button button-primary",
                r#type: "submit",
                disabled: blank,
                aria_label: "Send message",
                "Send"
            }
        }
    }
}
