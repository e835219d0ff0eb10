//! Scripted support assistant
//!
//! The widget is a small state machine: [`ChatWidget`] is closed or holds one
//! [`Conversation`], and every visitor action goes through
//! [`Conversation::apply`]. Replies that should appear after a "typing" delay
//! come back as [`ScheduledReply`] values; the caller sleeps for
//! `scheduled.delay` and hands them back to [`ChatWidget::deliver`].

mod conversation;
mod timing;
pub mod topics;
mod widget;

pub use conversation::{
    ChatAction, Conversation, Reply, ScheduledReply, Screen, ScreenKind, Speaker, TranscriptLine,
};
pub use timing::ChatTimings;
pub use topics::TopicEntry;
pub use widget::ChatWidget;
