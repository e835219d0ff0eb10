//! Literal page content
//!
//! Everything the static pages render lives here as plain data so the UI
//! crate only lays it out.

pub mod about;
pub mod home;
pub mod legal;
pub mod workspace;

pub use about::{about_section, AboutSection};
pub use home::{Feature, FooterLink, Step, Testimonial, FEATURES, STEPS, TESTIMONIALS};
pub use legal::{LegalBlock, LegalDocument, LegalSection, LegalText, PolicyKind};
pub use workspace::{
    format_dollars, sample_campaigns, sample_messages, settings_sections, CampaignStatus,
    CampaignSummary, DashboardStats, MessageSummary, SettingsRow, SettingsSection,
};
