//! Artificial reply latency for the assistant

use std::time::Duration;

/// How long the assistant "types" before each kind of reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTimings {
    /// Picking a topic until its answer appears
    pub answer: Duration,
    /// Answer until the "Did that solve your query?" prompt
    pub followup: Duration,
    /// Free-text message until the support acknowledgement
    pub support_reply: Duration,
    /// Search submission until the result list
    pub search: Duration,
}

impl ChatTimings {
    /// Every reply is delivered on the next tick
    pub fn immediate() -> Self {
        Self {
            answer: Duration::ZERO,
            followup: Duration::ZERO,
            support_reply: Duration::ZERO,
            search: Duration::ZERO,
        }
    }

    /// Scale every delay by `percent` (100 keeps the defaults)
    pub fn scaled(percent: u32) -> Self {
        let base = Self::default();
        let scale = |d: Duration| d * percent / 100;
        Self {
            answer: scale(base.answer),
            followup: scale(base.followup),
            support_reply: scale(base.support_reply),
            search: scale(base.search),
        }
    }
}

impl Default for ChatTimings {
    fn default() -> Self {
        Self {
            answer: Duration::from_millis(1500),
            followup: Duration::from_millis(1000),
            support_reply: Duration::from_millis(2000),
            search: Duration::from_millis(1500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_is_proportional() {
        let half = ChatTimings::scaled(50);
        assert_eq!(half.answer, Duration::from_millis(750));
        assert_eq!(half.support_reply, Duration::from_millis(1000));
        assert_eq!(ChatTimings::scaled(100), ChatTimings::default());
        assert_eq!(ChatTimings::scaled(0), ChatTimings::immediate());
    }
}
