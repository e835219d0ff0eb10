//! Transient toast notices ("coming soon" and friends)

use dioxus::core::{current_scope_id, Runtime, ScopeId};
use dioxus::prelude::*;

use crate::ui::Platform;

/// How long a notice stays up
pub const NOTICE_DISMISS_MS: u64 = 3000;

pub const SEARCH_COMING_SOON: &str = "Search is coming soon!";
pub const NEWSLETTER_COMING_SOON: &str = "Newsletter signup is coming soon!";
pub const PASSWORD_RESET_UNAVAILABLE: &str = "Password reset is not available yet.";

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NoticeState {
    pub current: Signal<Option<Notice>>,
    next_id: Signal<u64>,
    /// Scope the dismiss timers run on; outlives the page that showed the notice
    owner: ScopeId,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
            owner: current_scope_id(),
        }
    }

    /// Show `text`, replacing any visible notice, and dismiss it later
    pub fn show(&mut self, platform: Platform, text: impl Into<String>) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.current.set(Some(Notice {
            id,
            text: text.into(),
        }));

        let mut current = self.current;
        Runtime::current().spawn(self.owner, async move {
            platform.sleep_ms(NOTICE_DISMISS_MS).await;
            // A newer notice keeps its own timer
            let still_showing = current.peek().as_ref().map(|n| n.id) == Some(id);
            if still_showing {
                current.set(None);
            }
        });
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use dioxus::core::NoOpMutations;

    use crate::infrastructure::platform::mock::MockPlatform;

    type StateSlot = Rc<RefCell<Option<NoticeState>>>;

    #[component]
    fn NoticeHost() -> Element {
        let notices = use_context_provider(NoticeState::new);
        let slot = use_context::<StateSlot>();
        use_hook(move || *slot.borrow_mut() = Some(notices));

        let mut page_open = use_signal(|| true);
        rsx! {
            if page_open() {
                ForgotPasswordPage { on_leave: move |_| page_open.set(false) }
            }
        }
    }

    /// Shows a notice and navigates away in the same breath
    #[component]
    fn ForgotPasswordPage(on_leave: EventHandler<()>) -> Element {
        let mut notices = use_context::<NoticeState>();
        let platform = use_context::<Platform>();
        use_effect(move || {
            notices.show(platform.clone(), PASSWORD_RESET_UNAVAILABLE);
            on_leave.call(());
        });
        rsx! { "login" }
    }

    #[test]
    fn test_notice_dismisses_after_showing_page_unmounts() {
        let mock = MockPlatform::new();
        let platform: Platform = Arc::new(mock.platform());
        let slot: StateSlot = Rc::new(RefCell::new(None));

        let mut dom = VirtualDom::new(NoticeHost)
            .with_root_context(platform)
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        for _ in 0..20 {
            dom.render_immediate(&mut NoOpMutations);
        }

        let notices = slot.borrow().expect("notice state provided");
        assert_eq!(mock.sleep.requested(), vec![NOTICE_DISMISS_MS]);
        dom.in_runtime(|| {
            assert_eq!(*notices.current.peek(), None);
            assert_eq!(*notices.next_id.peek(), 1);
        });
    }
}
