//! Routed pages

mod about;
mod auth;
mod home;
mod legal;
mod not_found;
mod workspace;

pub use about::{About, AboutSection};
pub use auth::{Login, Register};
pub use home::Home;
pub use legal::{CookiePolicy, Policies, PrivacyPolicy, TermsOfService};
pub use not_found::NotFound;
pub use workspace::{Campaigns, Dashboard, Messages, Profile, Settings};
