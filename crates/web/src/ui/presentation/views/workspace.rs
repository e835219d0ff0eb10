//! Signed-in pages
//!
//! Everything here sits behind the session guard, so an identity is normally
//! present; the pages still render sensibly without one.

use dioxus::prelude::*;

use adgorithm_domain::content::{
    format_dollars, sample_campaigns, sample_messages, settings_sections, CampaignSummary,
    DashboardStats, MessageSummary,
};

use crate::presentation::state::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DashboardTab {
    Overview,
    Campaigns,
    Messages,
}

impl DashboardTab {
    const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Campaigns,
        DashboardTab::Messages,
    ];

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Campaigns => "Campaigns",
            DashboardTab::Messages => "Messages",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let mut active = use_signal(|| DashboardTab::Overview);
    let campaigns = use_hook(sample_campaigns);
    let messages = use_hook(sample_messages);
    let current = active();

    rsx! {
        div {
            class: "workspace",
            h1 { "Dashboard" }
            nav {
                class: "tabs",
                for tab in DashboardTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == current { "tab active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            div {
                class: "tab-panel",
                {match current {
                    DashboardTab::Overview => rsx! {
                        Overview { campaigns: campaigns.clone(), messages: messages.clone() }
                    },
                    DashboardTab::Campaigns => rsx! {
                        CampaignList { campaigns: campaigns.clone() }
                    },
                    DashboardTab::Messages => rsx! {
                        MessageList { messages: messages.clone() }
                    },
                }}
            }
        }
    }
}

#[component]
fn Overview(campaigns: Vec<CampaignSummary>, messages: Vec<MessageSummary>) -> Element {
    let stats = DashboardStats::from_records(&campaigns, &messages);
    let budget = format_dollars(stats.total_budget);

    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Active Campaigns", value: stats.active_campaigns.to_string() }
            StatCard { label: "Total Budget", value: budget }
            StatCard { label: "New Messages", value: stats.new_messages.to_string() }
            StatCard { label: "Total Applicants", value: stats.total_applicants.to_string() }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            h3 { "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn CampaignList(campaigns: Vec<CampaignSummary>) -> Element {
    rsx! {
        ul {
            class: "record-list",
            for campaign in campaigns {
                CampaignRow { key: "{campaign.id}", campaign }
            }
        }
    }
}

#[component]
fn CampaignRow(campaign: CampaignSummary) -> Element {
    let budget = format_dollars(campaign.budget);
    let deadline = campaign.deadline.format("%b %-d, %Y").to_string();
    let status = campaign.status.as_str();

    rsx! {
        li {
            class: "card record",
            div {
                class: "record-head",
                h3 { "{campaign.title}" }
                span { class: "status status-{status}", "{status}" }
            }
            div {
                class: "record-meta",
                p { "Budget: {budget}" }
                p { "Deadline: {deadline}" }
                p { "{campaign.applicants} applicants" }
            }
            button { class: "link-button", "View details →" }
        }
    }
}

#[component]
fn MessageList(messages: Vec<MessageSummary>) -> Element {
    rsx! {
        ul {
            class: "record-list",
            for message in messages {
                li {
                    key: "{message.id}",
                    class: if message.unread { "card record unread" } else { "card record" },
                    div {
                        class: "record-head",
                        p { class: "sender", "{message.sender}" }
                        if message.unread {
                            span { class: "badge", "New" }
                        }
                        span { class: "received", "{message.received}" }
                    }
                    p { class: "preview", "{message.preview}" }
                }
            }
        }
    }
}

#[component]
pub fn Campaigns() -> Element {
    let campaigns = use_hook(sample_campaigns);

    rsx! {
        div {
            class: "workspace",
            h1 { "Campaigns" }
            CampaignList { campaigns }
        }
    }
}

#[component]
pub fn Messages() -> Element {
    let messages = use_hook(sample_messages);

    rsx! {
        div {
            class: "workspace",
            h1 { "Messages" }
            MessageList { messages }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let session_state = use_context::<SessionState>();
    let identity = session_state.session.read().identity().cloned();

    rsx! {
        div {
            class: "workspace",
            h1 { "Profile" }
            {identity.map(|identity| {
                let initials = identity.initials();
                let role = identity.role.display_name();
                rsx! {
                    div {
                        class: "card profile-card",
                        div { class: "avatar avatar-large", "{initials}" }
                        h2 { "{identity.display_name}" }
                        p { "{identity.email}" }
                        dl {
                            dt { "Role" }
                            dd { "{role}" }
                            dt { "Status" }
                            dd { "Active" }
                        }
                    }
                }
            })}
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let session_state = use_context::<SessionState>();
    let sections = settings_sections(session_state.session.read().identity());

    rsx! {
        div {
            class: "workspace",
            h1 { "Settings" }
            for group in sections {
                section {
                    key: "{group.title}",
                    class: "card settings-section",
                    h2 { "{group.title}" }
                    p { class: "muted", "{group.description}" }
                    dl {
                        for row in group.rows {
                            div {
                                key: "{row.name}",
                                class: "settings-row",
                                dt { "{row.name}" }
                                dd { "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_tab_labels() {
        let labels: Vec<&str> = DashboardTab::ALL.iter().map(DashboardTab::label).collect();
        assert_eq!(labels, vec!["Overview", "Campaigns", "Messages"]);
    }
}
