//! Sample data for the signed-in pages (dashboard, campaigns, messages, settings)

use chrono::NaiveDate;

use crate::ids::{CampaignId, MessageId};
use crate::session::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Active,
    Pending,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Pending => "pending",
            CampaignStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub title: &'static str,
    pub status: CampaignStatus,
    /// Whole dollars
    pub budget: u32,
    pub deadline: NaiveDate,
    pub applicants: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    pub id: MessageId,
    pub sender: &'static str,
    pub preview: &'static str,
    /// Relative time label, e.g. "2h ago"
    pub received: &'static str,
    pub unread: bool,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_campaigns() -> Vec<CampaignSummary> {
    vec![
        CampaignSummary {
            id: CampaignId::from_u128(1),
            title: "Summer Collection Launch",
            status: CampaignStatus::Active,
            budget: 5000,
            deadline: date(2024, 6, 30),
            applicants: 12,
        },
        CampaignSummary {
            id: CampaignId::from_u128(2),
            title: "Product Review Campaign",
            status: CampaignStatus::Pending,
            budget: 2000,
            deadline: date(2024, 7, 15),
            applicants: 5,
        },
    ]
}

pub fn sample_messages() -> Vec<MessageSummary> {
    vec![
        MessageSummary {
            id: MessageId::from_u128(1),
            sender: "Sarah Johnson",
            preview: "Hi, I would love to collaborate on your summer collection...",
            received: "2h ago",
            unread: true,
        },
        MessageSummary {
            id: MessageId::from_u128(2),
            sender: "Mike Chen",
            preview: "Thank you for your interest in our campaign...",
            received: "1d ago",
            unread: false,
        },
    ]
}

/// Overview cards on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub active_campaigns: usize,
    pub total_budget: u32,
    pub new_messages: usize,
    pub total_applicants: u32,
}

impl DashboardStats {
    pub fn from_records(campaigns: &[CampaignSummary], messages: &[MessageSummary]) -> Self {
        Self {
            active_campaigns: campaigns
                .iter()
                .filter(|campaign| campaign.status == CampaignStatus::Active)
                .count(),
            total_budget: campaigns.iter().map(|campaign| campaign.budget).sum(),
            new_messages: messages.iter().filter(|message| message.unread).count(),
            total_applicants: campaigns.iter().map(|campaign| campaign.applicants).sum(),
        }
    }
}

/// `7000` -> `"$7,000"`
pub fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: Vec<SettingsRow>,
}

fn row(name: &'static str, value: impl Into<String>) -> SettingsRow {
    SettingsRow {
        name,
        value: value.into(),
    }
}

/// The settings page; profile and account rows read the signed-in identity
pub fn settings_sections(identity: Option<&Identity>) -> Vec<SettingsSection> {
    let name = identity.map_or("Not set", |identity| identity.display_name.as_str());
    let email = identity.map_or("Not set", |identity| identity.email.as_str());
    let account_type = identity.map_or("Standard", |identity| identity.role.display_name());

    vec![
        SettingsSection {
            title: "Profile Settings",
            description: "Update your personal information and preferences",
            rows: vec![
                row("Name", name),
                row("Email", email),
                row("Bio", "Click to add bio"),
            ],
        },
        SettingsSection {
            title: "Notifications",
            description: "Configure how you receive notifications",
            rows: vec![
                row("Email notifications", "Enabled"),
                row("Push notifications", "Disabled"),
                row("Marketing emails", "Disabled"),
            ],
        },
        SettingsSection {
            title: "Privacy & Security",
            description: "Manage your account security and privacy preferences",
            rows: vec![
                row("Two-factor authentication", "Disabled"),
                row("Profile visibility", "Public"),
                row("Data sharing", "Limited"),
            ],
        },
        SettingsSection {
            title: "Language & Region",
            description: "Set your preferred language and regional settings",
            rows: vec![
                row("Language", "English"),
                row("Time zone", "UTC-5"),
                row("Date format", "MM/DD/YYYY"),
            ],
        },
        SettingsSection {
            title: "Account",
            description: "Manage your account settings and preferences",
            rows: vec![
                row("Account type", account_type),
                row("Account status", "Active"),
                row("Member since", "January 2024"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn stats_are_derived_from_the_records() {
        let stats = DashboardStats::from_records(&sample_campaigns(), &sample_messages());
        assert_eq!(
            stats,
            DashboardStats {
                active_campaigns: 1,
                total_budget: 7000,
                new_messages: 1,
                total_applicants: 17,
            }
        );
        assert_eq!(
            DashboardStats::from_records(&[], &[]),
            DashboardStats::default()
        );
    }

    #[test]
    fn dollars_are_grouped_by_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(7000), "$7,000");
        assert_eq!(format_dollars(1_234_567), "$1,234,567");
    }

    #[test]
    fn settings_fall_back_without_a_session() {
        let sections = settings_sections(None);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].rows[0].value, "Not set");
        assert_eq!(sections[4].rows[0].value, "Standard");
    }

    #[test]
    fn settings_read_the_identity() {
        let identity = Identity::demo(Role::Influencer);
        let sections = settings_sections(Some(&identity));
        assert_eq!(sections[0].rows[0].value, "John Doe");
        assert_eq!(sections[0].rows[1].value, "john@example.com");
        assert_eq!(sections[4].rows[0].value, "Influencer");
    }

    #[test]
    fn campaign_deadlines_parse() {
        let campaigns = sample_campaigns();
        assert_eq!(campaigns[0].deadline.to_string(), "2024-06-30");
        assert_eq!(campaigns[1].status.as_str(), "pending");
    }
}
