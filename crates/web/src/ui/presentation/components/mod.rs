//! Reusable UI components

mod cards;
mod chatbot;
mod footer;
mod navbar;
mod notice_toast;
mod policy_sidebar;

pub use cards::{FeatureCard, StepCard, TestimonialCard};
pub use chatbot::Chatbot;
pub use footer::Footer;
pub use navbar::Navbar;
pub use notice_toast::NoticeToast;
pub use policy_sidebar::{PolicyPills, PolicySidebar};
