//! adgorithm domain
//!
//! Pure types with no UI or platform dependencies: the visitor session, the
//! scripted assistant's state machine and the literal content of the pages.

pub mod chat;
pub mod content;
pub mod error;
pub mod ids;
pub mod session;

// Re-export ID types
pub use ids::{CampaignId, MessageId, UserId};

// Re-export session types
pub use session::{Credentials, Identity, Registration, Role, Session};

// Re-export the assistant state machine
pub use chat::{
    ChatAction, ChatTimings, ChatWidget, Conversation, Reply, ScheduledReply, Screen, ScreenKind,
    Speaker, TopicEntry, TranscriptLine,
};

pub use error::{AuthError, ChatError, RoleParseError};
