//! Chatbot widget state and reply scheduling
//!
//! The widget's state machine lives in the domain crate; this wrapper owns
//! the text inputs and the Dioxus tasks delivering delayed replies.
//!
//! Reply tasks run on the scope that created the state (the app root), not
//! on the component whose button triggered them: the topic list unmounts as
//! soon as a topic is picked.

use dioxus::core::{current_scope_id, Runtime, ScopeId, Task};
use dioxus::prelude::*;

use adgorithm_domain::{ChatAction, ChatTimings, ChatWidget, Reply, ScheduledReply, Session};

use crate::application::services::deliver_chain;
use crate::ui::Platform;

#[derive(Clone, Copy)]
pub struct ChatState {
    pub widget: Signal<ChatWidget>,
    /// Free-text box on the Chat screen
    pub message_input: Signal<String>,
    /// Query box on the Search screen
    pub search_input: Signal<String>,
    /// Reply deliveries still running, keyed so each can remove itself
    tasks: Signal<Vec<(u64, Task)>>,
    next_task: Signal<u64>,
    owner: ScopeId,
}

impl ChatState {
    pub fn new(timings: ChatTimings) -> Self {
        Self {
            widget: Signal::new(ChatWidget::new(timings)),
            message_input: Signal::new(String::new()),
            search_input: Signal::new(String::new()),
            tasks: Signal::new(Vec::new()),
            next_task: Signal::new(0),
            owner: current_scope_id(),
        }
    }

    /// Number of reply chains that have not finished yet
    pub fn pending_replies(&self) -> usize {
        self.tasks.peek().len()
    }

    pub fn is_open(&self) -> bool {
        self.widget.read().is_open()
    }

    pub fn toggle(&mut self, session: &Session) {
        if self.widget.peek().is_open() {
            self.close();
        } else {
            self.widget.write().open(session);
            tracing::debug!("Chat widget opened");
        }
    }

    /// Close the widget, dropping the conversation and pending replies
    pub fn close(&mut self) {
        self.cancel_pending();
        self.widget.write().close();
        self.message_input.set(String::new());
        self.search_input.set(String::new());
        tracing::debug!("Chat widget closed");
    }

    /// Apply a visitor action and schedule whatever reply it triggers
    pub fn dispatch(&mut self, platform: Platform, action: ChatAction) {
        let name = action.name();
        let result = self.widget.write().apply(action);
        match result {
            Ok(Some(first)) => {
                tracing::debug!(action = name, "Chat action scheduled a reply");
                self.schedule(platform, first);
            }
            Ok(None) => tracing::debug!(action = name, "Chat action applied"),
            Err(e) => tracing::warn!("Ignoring chat action: {}", e),
        }
    }

    /// Submit the free-text box; the box empties right away
    pub fn submit_message(&mut self, platform: Platform) {
        let text = self.message_input.peek().clone();
        self.message_input.set(String::new());
        self.dispatch(platform, ChatAction::SubmitMessage(text));
    }

    /// Submit the search box; it empties when the results arrive
    pub fn submit_search(&mut self, platform: Platform) {
        let query = self.search_input.peek().clone();
        self.dispatch(platform, ChatAction::SubmitSearch(query));
    }

    /// Keep an open conversation in step with a login or logout
    pub fn session_changed(&mut self, session: &Session) {
        let restarted = self.widget.write().session_changed(session);
        if restarted {
            self.cancel_pending();
            self.search_input.set(String::new());
            tracing::debug!("Chat conversation restarted for new session");
        }
    }

    fn cancel_pending(&mut self) {
        for (_, task) in self.tasks.write().drain(..) {
            task.cancel();
        }
    }

    fn schedule(&mut self, platform: Platform, first: ScheduledReply) {
        let id = *self.next_task.peek();
        self.next_task.set(id + 1);

        let mut widget = self.widget;
        let mut search_input = self.search_input;
        let mut tasks = self.tasks;
        let delivery = async move {
            deliver_chain(platform, first, move |scheduled| {
                let before = widget.peek().conversation().map(|c| c.transcript().len());
                let next = widget.write().deliver(scheduled);
                let after = widget.peek().conversation().map(|c| c.transcript().len());
                if matches!(scheduled.reply, Reply::SearchResults(_)) && before != after {
                    search_input.set(String::new());
                }
                next
            })
            .await;
            tasks.write().retain(|(task_id, _)| *task_id != id);
        };

        let task = Runtime::current().spawn(self.owner, delivery);
        self.tasks.write().push((id, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use adgorithm_domain::{Role, ScreenKind};
    use dioxus::core::NoOpMutations;

    use crate::infrastructure::platform::mock::MockPlatform;

    type StateSlot = Rc<RefCell<Option<ChatState>>>;

    /// Provides the chat state the way the app root does and mounts the
    /// topic list only while topics are on offer
    #[component]
    fn ChatHost() -> Element {
        let mut chat = use_context_provider(|| ChatState::new(ChatTimings::immediate()));
        let platform = use_context::<Platform>();
        let slot = use_context::<StateSlot>();
        use_hook(move || *slot.borrow_mut() = Some(chat));

        use_effect(move || {
            chat.toggle(&Session::LoggedOut);
            chat.dispatch(platform.clone(), ChatAction::ChooseParticipant(Role::Brand));
        });

        let offering_topics = chat.widget.read().screen_kind() == ScreenKind::QuerySelection;
        rsx! {
            if offering_topics {
                TopicPick {}
            }
        }
    }

    /// Picks a topic once mounted, like a click on the topic list
    #[component]
    fn TopicPick() -> Element {
        let mut chat = use_context::<ChatState>();
        let platform = use_context::<Platform>();
        use_effect(move || {
            chat.dispatch(platform.clone(), ChatAction::PickTopic("brand-3".to_string()));
        });
        rsx! { "topics" }
    }

    fn settle(dom: &mut VirtualDom) {
        for _ in 0..20 {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[test]
    fn test_answer_arrives_after_topic_list_unmounts() {
        let mock = MockPlatform::new();
        let platform: Platform = Arc::new(mock.platform());
        let slot: StateSlot = Rc::new(RefCell::new(None));

        let mut dom = VirtualDom::new(ChatHost)
            .with_root_context(platform)
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        settle(&mut dom);

        let chat = slot.borrow().expect("chat state provided");
        dom.in_runtime(|| {
            let widget = chat.widget.peek();
            let conversation = widget.conversation().expect("widget open");
            assert_eq!(widget.screen_kind(), ScreenKind::Resolved);
            assert_eq!(conversation.transcript().len(), 4);
            assert_eq!(
                conversation.transcript()[3].text,
                "Did that solve your query?"
            );
            assert!(!conversation.is_typing());
            assert_eq!(chat.pending_replies(), 0);
        });
        assert_eq!(mock.sleep.requested(), vec![0, 0]);
    }

    #[test]
    fn test_close_cancels_pending_reply() {
        let mock = MockPlatform::new();
        let platform: Platform = Arc::new(mock.platform());
        let slot: StateSlot = Rc::new(RefCell::new(None));

        let mut dom = VirtualDom::new(ChatHost)
            .with_root_context(platform.clone())
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        settle(&mut dom);

        let mut chat = slot.borrow().expect("chat state provided");
        dom.in_runtime(|| {
            // Start over on the topic list and pick without letting the
            // reply run
            chat.close();
            chat.toggle(&Session::LoggedOut);
            chat.dispatch(platform.clone(), ChatAction::ChooseParticipant(Role::Brand));
            chat.dispatch(platform.clone(), ChatAction::PickTopic("brand-1".to_string()));
            assert_eq!(chat.pending_replies(), 1);
            chat.close();
            assert_eq!(chat.pending_replies(), 0);
        });
        settle(&mut dom);

        dom.in_runtime(|| assert!(!chat.widget.peek().is_open()));
        // Only the first conversation's two sleeps ever ran
        assert_eq!(mock.sleep.requested(), vec![0, 0]);
    }
}
