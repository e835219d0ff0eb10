//! Timed delivery of assistant replies
//!
//! The state machine hands back a [`ScheduledReply`] whenever a reply should
//! appear after a typing delay. [`deliver_chain`] sleeps on the platform port,
//! delivers, and keeps going while deliveries schedule follow-ups.

use std::sync::Arc;

use adgorithm_domain::ScheduledReply;

use crate::ports::outbound::PlatformPort;

/// Sleep for each reply's delay and deliver it, following the chain.
///
/// `deliver` returns the next reply to schedule, or `None` to stop (chain
/// complete, or the reply was stale because the widget closed).
pub async fn deliver_chain<F>(platform: Arc<dyn PlatformPort>, first: ScheduledReply, mut deliver: F)
where
    F: FnMut(ScheduledReply) -> Option<ScheduledReply>,
{
    let mut next = Some(first);
    while let Some(scheduled) = next {
        let delay_ms = u64::try_from(scheduled.delay.as_millis()).unwrap_or(u64::MAX);
        platform.sleep_ms(delay_ms).await;
        tracing::debug!(reply = ?scheduled.reply, epoch = scheduled.epoch, "Delivering reply");
        next = deliver(scheduled);
    }
}
