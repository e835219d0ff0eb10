use crate::chat::conversation::{ChatAction, Conversation, ScheduledReply, Screen, ScreenKind};
use crate::chat::timing::ChatTimings;
use crate::error::ChatError;
use crate::session::Session;

/// The floating assistant: closed, or open with one conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatWidget {
    conversation: Option<Conversation>,
    /// Bumped on every open and close
    epoch: u64,
    timings: ChatTimings,
}

impl ChatWidget {
    pub fn new(timings: ChatTimings) -> Self {
        Self {
            conversation: None,
            epoch: 0,
            timings,
        }
    }

    pub fn is_open(&self) -> bool {
        self.conversation.is_some()
    }

    pub fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.conversation
            .as_ref()
            .map_or(ScreenKind::Closed, |conversation| conversation.screen().kind())
    }

    pub fn open(&mut self, session: &Session) {
        if self.is_open() {
            return;
        }
        self.epoch += 1;
        self.conversation = Some(Conversation::start(session, self.epoch, self.timings));
    }

    /// Drop the conversation; replies still in flight become stale
    pub fn close(&mut self) {
        if self.conversation.take().is_some() {
            self.epoch += 1;
        }
    }

    pub fn toggle(&mut self, session: &Session) {
        if self.is_open() {
            self.close();
        } else {
            self.open(session);
        }
    }

    pub fn apply(&mut self, action: ChatAction) -> Result<Option<ScheduledReply>, ChatError> {
        match self.conversation.as_mut() {
            Some(conversation) => conversation.apply(action),
            None => Err(ChatError::not_available(action.name(), ScreenKind::Closed)),
        }
    }

    pub fn deliver(&mut self, scheduled: ScheduledReply) -> Option<ScheduledReply> {
        self.conversation
            .as_mut()
            .and_then(|conversation| conversation.deliver(scheduled))
    }

    /// React to a login, logout or role change while the widget is open.
    ///
    /// Only the two session-dependent entry screens move: `Initial` becomes
    /// `Search` on login and `Search` follows the new session. Returns true
    /// when the conversation was restarted.
    pub fn session_changed(&mut self, session: &Session) -> bool {
        let Some(conversation) = self.conversation.as_ref() else {
            return false;
        };
        let restart = match (conversation.screen(), session.role()) {
            (Screen::Initial, Some(_)) => true,
            (Screen::Search { .. }, None) => true,
            (Screen::Search { role }, Some(current)) => role != current,
            _ => false,
        };
        if restart {
            self.epoch += 1;
            self.conversation = Some(Conversation::start(session, self.epoch, self.timings));
        }
        restart
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(ChatTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Reply;
    use crate::session::{Identity, Role};

    fn member(role: Role) -> Session {
        Session::LoggedIn(Identity::demo(role))
    }

    #[test]
    fn starts_closed() {
        let mut widget = ChatWidget::default();
        assert!(!widget.is_open());
        assert_eq!(widget.screen_kind(), ScreenKind::Closed);
        assert_eq!(
            widget.apply(ChatAction::NotListed),
            Err(ChatError::not_available("not_listed", ScreenKind::Closed))
        );
    }

    #[test]
    fn entry_screen_follows_authentication() {
        let mut widget = ChatWidget::default();
        widget.open(&Session::LoggedOut);
        assert_eq!(widget.screen_kind(), ScreenKind::Initial);
        widget.close();
        widget.open(&member(Role::Brand));
        assert_eq!(widget.screen_kind(), ScreenKind::Search);
    }

    #[test]
    fn reopening_discards_the_transcript() {
        let mut widget = ChatWidget::default();
        widget.toggle(&Session::LoggedOut);
        widget
            .apply(ChatAction::ChooseParticipant(Role::Brand))
            .unwrap();
        widget.apply(ChatAction::NotListed).unwrap();
        assert_eq!(widget.conversation().unwrap().transcript().len(), 3);

        widget.toggle(&Session::LoggedOut);
        assert!(widget.conversation().is_none());
        widget.toggle(&Session::LoggedOut);
        let conversation = widget.conversation().unwrap();
        assert_eq!(conversation.screen(), Screen::Initial);
        assert!(conversation.transcript().is_empty());
        assert!(!conversation.is_typing());
    }

    #[test]
    fn replies_scheduled_before_close_are_dropped() {
        let mut widget = ChatWidget::default();
        widget.open(&Session::LoggedOut);
        widget
            .apply(ChatAction::ChooseParticipant(Role::Influencer))
            .unwrap();
        let stale = widget
            .apply(ChatAction::PickTopic("influencer-3".to_string()))
            .unwrap()
            .unwrap();
        assert!(matches!(stale.reply, Reply::TopicAnswer(_)));

        widget.close();
        assert_eq!(widget.deliver(stale), None);

        widget.open(&Session::LoggedOut);
        assert_eq!(widget.deliver(stale), None);
        let conversation = widget.conversation().unwrap();
        assert!(conversation.transcript().is_empty());
        assert_eq!(conversation.screen(), Screen::Initial);
    }

    #[test]
    fn open_twice_keeps_the_conversation() {
        let mut widget = ChatWidget::default();
        widget.open(&Session::LoggedOut);
        widget
            .apply(ChatAction::ChooseParticipant(Role::Brand))
            .unwrap();
        let epoch = widget.epoch();
        widget.open(&Session::LoggedOut);
        assert_eq!(widget.epoch(), epoch);
        assert_eq!(widget.screen_kind(), ScreenKind::QuerySelection);
    }

    #[test]
    fn login_while_on_initial_switches_to_search() {
        let mut widget = ChatWidget::default();
        widget.open(&Session::LoggedOut);
        assert!(widget.session_changed(&member(Role::Influencer)));
        assert_eq!(
            widget.conversation().unwrap().screen(),
            Screen::Search {
                role: Role::Influencer
            }
        );
    }

    #[test]
    fn logout_while_searching_returns_to_initial() {
        let session = member(Role::Brand);
        let mut widget = ChatWidget::default();
        widget.open(&session);
        widget
            .apply(ChatAction::SubmitSearch("shoes".to_string()))
            .unwrap();

        assert!(widget.session_changed(&Session::LoggedOut));
        let conversation = widget.conversation().unwrap();
        assert_eq!(conversation.screen(), Screen::Initial);
        assert!(conversation.transcript().is_empty());
    }

    #[test]
    fn session_change_leaves_scripted_screens_alone() {
        let mut widget = ChatWidget::default();
        widget.open(&Session::LoggedOut);
        widget
            .apply(ChatAction::ChooseParticipant(Role::Brand))
            .unwrap();
        assert!(!widget.session_changed(&member(Role::Brand)));
        assert_eq!(widget.screen_kind(), ScreenKind::QuerySelection);

        let mut closed = ChatWidget::default();
        assert!(!closed.session_changed(&member(Role::Brand)));
        assert!(!closed.is_open());
    }

    #[test]
    fn role_change_restarts_search() {
        let mut widget = ChatWidget::default();
        widget.open(&member(Role::Brand));
        assert!(!widget.session_changed(&member(Role::Brand)));
        assert!(widget.session_changed(&member(Role::Influencer)));
        assert_eq!(
            widget.conversation().unwrap().screen(),
            Screen::Search {
                role: Role::Influencer
            }
        );
    }
}
