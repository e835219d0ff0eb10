use std::time::Duration;

use crate::chat::timing::ChatTimings;
use crate::chat::topics::{self, TopicEntry};
use crate::error::ChatError;
use crate::session::{Role, Session};

pub(crate) const RESOLUTION_PROMPT: &str = "Did that solve your query?";
const NOT_LISTED: &str = "My question isn't listed here.";
const NOT_LISTED_ACK: &str = "I understand. Please describe your issue and our support team will get back to you as soon as possible.";
const SOLVED: &str = "Yes, thank you!";
const SOLVED_ACK: &str = "Great! Is there anything else I can help you with?";
const NOT_SOLVED: &str = "No, I need more help.";
const NOT_SOLVED_ACK: &str = "I understand. Let me suggest some related queries that might help:";
const SUPPORT_FOLLOW_UP: &str = "Thank you for your message. Our support team will contact you shortly to address your specific query. For faster assistance, please check your email for updates.";

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Assistant,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub speaker: Speaker,
}

impl TranscriptLine {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::Assistant,
        }
    }

    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::Visitor,
        }
    }

    pub fn is_from_assistant(&self) -> bool {
        self.speaker == Speaker::Assistant
    }
}

/// The screen the open widget is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Asks whether the visitor is a brand or an influencer
    Initial,
    QuerySelection { participant: Role },
    /// A topic was picked; its answer is pending or shown
    Resolved {
        participant: Role,
        topic: &'static TopicEntry,
    },
    /// Offers the secondary topics
    NotResolved { participant: Role },
    /// Free-text message to support
    Chat { participant: Role },
    /// Signed-in shortcut: search the other side of the marketplace
    Search { role: Role },
}

/// Field-less mirror of [`Screen`] (plus the closed widget) for errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Closed,
    Initial,
    QuerySelection,
    Resolved,
    NotResolved,
    Chat,
    Search,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Initial => ScreenKind::Initial,
            Screen::QuerySelection { .. } => ScreenKind::QuerySelection,
            Screen::Resolved { .. } => ScreenKind::Resolved,
            Screen::NotResolved { .. } => ScreenKind::NotResolved,
            Screen::Chat { .. } => ScreenKind::Chat,
            Screen::Search { .. } => ScreenKind::Search,
        }
    }

    /// Where a fresh conversation starts for this session
    pub fn entry_for(session: &Session) -> Self {
        match session.role() {
            Some(role) => Screen::Search { role },
            None => Screen::Initial,
        }
    }
}

/// Something the visitor did in the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    ChooseParticipant(Role),
    PickTopic(String),
    /// "My question isn't listed here" / "I still need help with something else"
    NotListed,
    ConfirmSolved,
    DenySolved,
    SubmitMessage(String),
    SubmitSearch(String),
}

impl ChatAction {
    pub fn name(&self) -> &'static str {
        match self {
            ChatAction::ChooseParticipant(_) => "choose_participant",
            ChatAction::PickTopic(_) => "pick_topic",
            ChatAction::NotListed => "not_listed",
            ChatAction::ConfirmSolved => "confirm_solved",
            ChatAction::DenySolved => "deny_solved",
            ChatAction::SubmitMessage(_) => "submit_message",
            ChatAction::SubmitSearch(_) => "submit_search",
        }
    }
}

/// An assistant reply that appears after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Echo the topic prompt, then its answer
    TopicAnswer(&'static TopicEntry),
    ResolutionPrompt,
    SupportFollowUp,
    SearchResults(Role),
}

impl Reply {
    /// Whether the typing indicator is shown while this reply is pending
    fn shows_typing(&self) -> bool {
        !matches!(self, Reply::ResolutionPrompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReply {
    /// Conversation this reply belongs to; stale epochs are dropped
    pub epoch: u64,
    pub delay: Duration,
    pub reply: Reply,
}

fn welcome(participant: Role) -> &'static str {
    match participant {
        Role::Brand => "Welcome, Brand Manager! How can I help you today?",
        Role::Influencer => "Welcome, Influencer! How can I assist you today?",
    }
}

fn search_results(role: Role) -> String {
    let results = match role {
        Role::Brand => [
            "1. @lifestyle_creator (100k followers)",
            "2. @travel_expert (50k followers)",
            "3. @tech_reviewer (75k followers)",
        ],
        Role::Influencer => [
            "1. TechBrand (Tech Products)",
            "2. FashionCo (Fashion & Lifestyle)",
            "3. TravelGear (Travel Equipment)",
        ],
    };
    format!(
        "Here are some {} that match your search:\n{}",
        role.counterpart_plural(),
        results.join("\n")
    )
}

/// One open-widget conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    screen: Screen,
    transcript: Vec<TranscriptLine>,
    /// Replies in flight that show the typing indicator
    pending: u32,
    epoch: u64,
    timings: ChatTimings,
}

impl Conversation {
    pub fn start(session: &Session, epoch: u64, timings: ChatTimings) -> Self {
        Self {
            screen: Screen::entry_for(session),
            transcript: Vec::new(),
            pending: 0,
            epoch,
            timings,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Topic buttons the current screen offers
    pub fn offered_topics(&self) -> &'static [TopicEntry] {
        match self.screen {
            Screen::QuerySelection { participant } => topics::primary(participant),
            Screen::NotResolved { participant } => topics::secondary(participant),
            _ => &[],
        }
    }

    fn schedule(&mut self, delay: Duration, reply: Reply) -> ScheduledReply {
        if reply.shows_typing() {
            self.pending += 1;
        }
        ScheduledReply {
            epoch: self.epoch,
            delay,
            reply,
        }
    }

    fn say(&mut self, line: TranscriptLine) {
        self.transcript.push(line);
    }

    /// Apply a visitor action.
    ///
    /// Returns the reply to deliver later, if the action triggers one. Blank
    /// free text is accepted and ignored: nothing is appended or scheduled.
    pub fn apply(&mut self, action: ChatAction) -> Result<Option<ScheduledReply>, ChatError> {
        let not_available = ChatError::not_available(action.name(), self.screen.kind());

        match (self.screen, action) {
            (Screen::Initial, ChatAction::ChooseParticipant(participant)) => {
                self.screen = Screen::QuerySelection { participant };
                self.transcript = vec![TranscriptLine::assistant(welcome(participant))];
                Ok(None)
            }

            (
                Screen::QuerySelection { participant } | Screen::NotResolved { participant },
                ChatAction::PickTopic(id),
            ) => {
                let topic = topics::find_in(self.offered_topics(), &id)
                    .ok_or(ChatError::UnknownTopic(id))?;
                self.screen = Screen::Resolved { participant, topic };
                Ok(Some(
                    self.schedule(self.timings.answer, Reply::TopicAnswer(topic)),
                ))
            }

            (
                Screen::QuerySelection { participant } | Screen::NotResolved { participant },
                ChatAction::NotListed,
            ) => {
                self.screen = Screen::Chat { participant };
                self.say(TranscriptLine::visitor(NOT_LISTED));
                self.say(TranscriptLine::assistant(NOT_LISTED_ACK));
                Ok(None)
            }

            (Screen::Resolved { .. }, ChatAction::ConfirmSolved | ChatAction::DenySolved)
                if self.is_typing() =>
            {
                Err(not_available)
            }

            (Screen::Resolved { participant, .. }, ChatAction::ConfirmSolved) => {
                self.screen = Screen::QuerySelection { participant };
                self.say(TranscriptLine::visitor(SOLVED));
                self.say(TranscriptLine::assistant(SOLVED_ACK));
                Ok(None)
            }

            (Screen::Resolved { participant, .. }, ChatAction::DenySolved) => {
                self.screen = Screen::NotResolved { participant };
                self.say(TranscriptLine::visitor(NOT_SOLVED));
                self.say(TranscriptLine::assistant(NOT_SOLVED_ACK));
                Ok(None)
            }

            (Screen::Chat { .. }, ChatAction::SubmitMessage(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                self.say(TranscriptLine::visitor(text));
                Ok(Some(
                    self.schedule(self.timings.support_reply, Reply::SupportFollowUp),
                ))
            }

            (Screen::Search { role }, ChatAction::SubmitSearch(query)) => {
                let query = query.trim();
                if query.is_empty() {
                    return Ok(None);
                }
                self.say(TranscriptLine::assistant(format!(
                    "Searching for {} matching \"{}\"...",
                    role.counterpart_plural(),
                    query
                )));
                Ok(Some(
                    self.schedule(self.timings.search, Reply::SearchResults(role)),
                ))
            }

            _ => Err(not_available),
        }
    }

    /// Deliver a reply whose delay has elapsed.
    ///
    /// Returns a chained reply when one follows (the resolution prompt after a
    /// topic answer). Replies from another epoch are discarded.
    pub fn deliver(&mut self, scheduled: ScheduledReply) -> Option<ScheduledReply> {
        if scheduled.epoch != self.epoch {
            return None;
        }
        if scheduled.reply.shows_typing() {
            self.pending = self.pending.saturating_sub(1);
        }

        match scheduled.reply {
            Reply::TopicAnswer(topic) => {
                self.say(TranscriptLine::visitor(topic.prompt));
                self.say(TranscriptLine::assistant(topic.answer));
                Some(self.schedule(self.timings.followup, Reply::ResolutionPrompt))
            }
            Reply::ResolutionPrompt => {
                self.say(TranscriptLine::assistant(RESOLUTION_PROMPT));
                None
            }
            Reply::SupportFollowUp => {
                self.say(TranscriptLine::assistant(SUPPORT_FOLLOW_UP));
                None
            }
            Reply::SearchResults(role) => {
                self.say(TranscriptLine::assistant(search_results(role)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;

    fn guest() -> Conversation {
        Conversation::start(&Session::LoggedOut, 1, ChatTimings::default())
    }

    fn texts(conversation: &Conversation) -> Vec<&str> {
        conversation
            .transcript()
            .iter()
            .map(|line| line.text.as_str())
            .collect()
    }

    fn pick(conversation: &mut Conversation, id: &str) -> ScheduledReply {
        conversation
            .apply(ChatAction::PickTopic(id.to_string()))
            .unwrap()
            .unwrap()
    }

    /// Deliver a reply and everything it chains into
    fn settle(conversation: &mut Conversation, scheduled: ScheduledReply) {
        let mut next = Some(scheduled);
        while let Some(reply) = next {
            next = conversation.deliver(reply);
        }
    }

    #[test]
    fn guest_starts_on_initial_and_member_on_search() {
        assert_eq!(guest().screen(), Screen::Initial);
        let member = Conversation::start(
            &Session::LoggedIn(Identity::demo(Role::Influencer)),
            1,
            ChatTimings::default(),
        );
        assert_eq!(
            member.screen(),
            Screen::Search {
                role: Role::Influencer
            }
        );
        assert!(member.transcript().is_empty());
    }

    #[test]
    fn choosing_participant_starts_with_welcome() {
        let mut chat = guest();
        assert_eq!(
            chat.apply(ChatAction::ChooseParticipant(Role::Influencer)),
            Ok(None)
        );
        assert_eq!(
            texts(&chat),
            vec!["Welcome, Influencer! How can I assist you today?"]
        );
        assert_eq!(
            chat.screen(),
            Screen::QuerySelection {
                participant: Role::Influencer
            }
        );
        assert_eq!(chat.offered_topics().len(), 9);
    }

    #[test]
    fn picking_topic_resolves_then_appends_prompt_answer_and_question() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();

        let scheduled = pick(&mut chat, "brand-3");
        let topic = topics::find("brand-3").unwrap();
        assert_eq!(
            chat.screen(),
            Screen::Resolved {
                participant: Role::Brand,
                topic
            }
        );
        assert_eq!(scheduled.delay, Duration::from_millis(1500));
        assert!(chat.is_typing());
        assert_eq!(chat.transcript().len(), 1);

        let followup = chat.deliver(scheduled).unwrap();
        assert!(!chat.is_typing());
        assert_eq!(chat.transcript().len(), 3);
        assert_eq!(chat.transcript()[1], TranscriptLine::visitor(topic.prompt));
        assert_eq!(chat.transcript()[2], TranscriptLine::assistant(topic.answer));

        assert_eq!(followup.reply, Reply::ResolutionPrompt);
        assert_eq!(followup.delay, Duration::from_millis(1000));
        assert!(!chat.is_typing());
        assert_eq!(chat.deliver(followup), None);
        assert_eq!(texts(&chat).last(), Some(&"Did that solve your query?"));
    }

    #[test]
    fn brand_scenario_end_to_end() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        assert_eq!(
            texts(&chat),
            vec!["Welcome, Brand Manager! How can I help you today?"]
        );

        let scheduled = pick(&mut chat, "brand-3");
        settle(&mut chat, scheduled);
        let topic = topics::find("brand-3").unwrap();
        assert_eq!(topic.prompt, "How do I create a campaign?");
        assert_eq!(
            texts(&chat),
            vec![
                "Welcome, Brand Manager! How can I help you today?",
                "How do I create a campaign?",
                topic.answer,
                "Did that solve your query?",
            ]
        );

        chat.apply(ChatAction::DenySolved).unwrap();
        assert_eq!(
            chat.screen(),
            Screen::NotResolved {
                participant: Role::Brand
            }
        );
        let offered: Vec<_> = chat.offered_topics().iter().map(|t| t.id).collect();
        assert_eq!(offered, vec!["brand-5", "brand-6"]);
    }

    #[test]
    fn confirming_returns_to_topic_list() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Influencer))
            .unwrap();
        let scheduled = pick(&mut chat, "influencer-2");
        settle(&mut chat, scheduled);

        chat.apply(ChatAction::ConfirmSolved).unwrap();
        assert_eq!(
            chat.screen(),
            Screen::QuerySelection {
                participant: Role::Influencer
            }
        );
        let tail: Vec<_> = texts(&chat).into_iter().rev().take(2).collect();
        assert_eq!(
            tail,
            vec![
                "Great! Is there anything else I can help you with?",
                "Yes, thank you!"
            ]
        );
    }

    #[test]
    fn resolution_buttons_wait_for_the_answer() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        let scheduled = pick(&mut chat, "brand-1");

        assert_eq!(
            chat.apply(ChatAction::ConfirmSolved),
            Err(ChatError::not_available(
                "confirm_solved",
                ScreenKind::Resolved
            ))
        );
        settle(&mut chat, scheduled);
        assert!(chat.apply(ChatAction::ConfirmSolved).is_ok());
    }

    #[test]
    fn secondary_topic_resolves_like_primary() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Influencer))
            .unwrap();
        let scheduled = pick(&mut chat, "influencer-1");
        settle(&mut chat, scheduled);
        chat.apply(ChatAction::DenySolved).unwrap();

        // primary topics are not offered any more
        assert_eq!(
            chat.apply(ChatAction::PickTopic("influencer-1".to_string())),
            Err(ChatError::UnknownTopic("influencer-1".to_string()))
        );

        let before = chat.transcript().len();
        let scheduled = pick(&mut chat, "influencer-6");
        assert!(matches!(chat.screen(), Screen::Resolved { .. }));
        let followup = chat.deliver(scheduled).unwrap();
        assert_eq!(chat.transcript().len(), before + 2);
        chat.deliver(followup);
        assert_eq!(chat.transcript().len(), before + 3);
    }

    #[test]
    fn not_listed_opens_free_text_chat() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        chat.apply(ChatAction::NotListed).unwrap();
        assert_eq!(
            chat.screen(),
            Screen::Chat {
                participant: Role::Brand
            }
        );
        assert_eq!(
            chat.transcript()[1],
            TranscriptLine::visitor("My question isn't listed here.")
        );
        assert!(chat.transcript()[2].is_from_assistant());

        let scheduled = chat
            .apply(ChatAction::SubmitMessage("  my invoice is wrong ".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(
            texts(&chat).last(),
            Some(&"my invoice is wrong"),
            "visitor line precedes the reply it triggers"
        );
        assert!(chat.is_typing());
        assert_eq!(chat.deliver(scheduled), None);
        assert!(!chat.is_typing());
        assert!(texts(&chat)
            .last()
            .unwrap()
            .starts_with("Thank you for your message."));
    }

    #[test]
    fn still_need_help_also_opens_chat() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        let scheduled = pick(&mut chat, "brand-2");
        settle(&mut chat, scheduled);
        chat.apply(ChatAction::DenySolved).unwrap();
        chat.apply(ChatAction::NotListed).unwrap();
        assert_eq!(chat.screen().kind(), ScreenKind::Chat);
    }

    #[test]
    fn blank_text_changes_nothing() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        chat.apply(ChatAction::NotListed).unwrap();
        let before = chat.clone();
        assert_eq!(chat.apply(ChatAction::SubmitMessage("   ".to_string())), Ok(None));
        assert_eq!(chat, before);

        let mut search = Conversation::start(
            &Session::LoggedIn(Identity::demo(Role::Brand)),
            1,
            ChatTimings::default(),
        );
        let before = search.clone();
        assert_eq!(search.apply(ChatAction::SubmitSearch("\t".to_string())), Ok(None));
        assert_eq!(search, before);
    }

    #[test]
    fn search_announces_then_lists_results() {
        let mut chat = Conversation::start(
            &Session::LoggedIn(Identity::demo(Role::Brand)),
            4,
            ChatTimings::default(),
        );
        let scheduled = chat
            .apply(ChatAction::SubmitSearch("travel".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(scheduled.epoch, 4);
        assert_eq!(
            texts(&chat),
            vec!["Searching for influencers matching \"travel\"..."]
        );
        chat.deliver(scheduled);
        assert!(texts(&chat)[1].starts_with("Here are some influencers that match your search:"));
        assert!(texts(&chat)[1].contains("@travel_expert"));
    }

    #[test]
    fn influencer_search_lists_brands() {
        let mut chat = Conversation::start(
            &Session::LoggedIn(Identity::demo(Role::Influencer)),
            1,
            ChatTimings::default(),
        );
        let scheduled = chat
            .apply(ChatAction::SubmitSearch("fashion".to_string()))
            .unwrap()
            .unwrap();
        chat.deliver(scheduled);
        assert!(texts(&chat)[1].contains("FashionCo (Fashion & Lifestyle)"));
    }

    #[test]
    fn stale_epoch_is_ignored() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        let mut scheduled = pick(&mut chat, "brand-1");
        scheduled.epoch = 0;
        assert_eq!(chat.deliver(scheduled), None);
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.is_typing());
    }

    #[test]
    fn actions_outside_their_screen_are_rejected() {
        let mut chat = guest();
        assert_eq!(
            chat.apply(ChatAction::NotListed),
            Err(ChatError::not_available("not_listed", ScreenKind::Initial))
        );
        assert_eq!(
            chat.apply(ChatAction::SubmitSearch("x".to_string())),
            Err(ChatError::not_available("submit_search", ScreenKind::Initial))
        );
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        assert!(chat
            .apply(ChatAction::ChooseParticipant(Role::Influencer))
            .is_err());
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn transcript_order_is_append_order_across_a_long_session() {
        let mut chat = guest();
        chat.apply(ChatAction::ChooseParticipant(Role::Brand)).unwrap();
        let mut expected = vec![welcome(Role::Brand).to_string()];

        for id in ["brand-1", "brand-4"] {
            let scheduled = pick(&mut chat, id);
            settle(&mut chat, scheduled);
            let topic = topics::find(id).unwrap();
            expected.extend([
                topic.prompt.to_string(),
                topic.answer.to_string(),
                RESOLUTION_PROMPT.to_string(),
            ]);
            chat.apply(ChatAction::ConfirmSolved).unwrap();
            expected.extend([SOLVED.to_string(), SOLVED_ACK.to_string()]);
        }

        let actual: Vec<String> = chat.transcript().iter().map(|l| l.text.clone()).collect();
        assert_eq!(actual, expected);
    }
}
