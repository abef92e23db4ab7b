use tracing::{info, warn};

use crate::api::ChatApi;
use crate::errors::ChatError;
use crate::models::{Message, QueryRequest, QueryResponse};
use crate::render::{sidebar, Renderer, SidebarEntry, WELCOME_TEXT};
use crate::session::{BlockId, SessionStore, Transcript};

/// Where the current turn is. Input controls are disabled while `Sending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Sending { placeholder: BlockId },
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Success { session_id: Option<String> },
    Failure { error: ChatError },
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Success { .. })
    }
}

/// Drives request/response turns and owns the session history.
#[derive(Debug, Clone)]
pub struct ChatController {
    store: SessionStore,
    renderer: Renderer,
    turn: TurnState,
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new(Renderer::default())
    }
}

impl ChatController {
    /// Starts with one new session showing the welcome message.
    pub fn new(renderer: Renderer) -> Self {
        let mut controller = Self { store: SessionStore::new(), renderer, turn: TurnState::Idle };
        controller.new_session();
        controller
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn transcript(&self) -> &Transcript {
        self.store.transcript()
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.turn, TurnState::Sending { .. })
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar(&self.store)
    }

    /// Enters `Sending` and returns the request to issue.
    ///
    /// Returns `None` without touching anything when the trimmed input is
    /// empty or another turn is still in flight.
    pub fn begin_turn(&mut self, input: &str) -> Option<QueryRequest> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }
        if self.is_sending() {
            warn!("Ignoring submit while a query is in flight");
            return None;
        }

        let transcript = self.store.transcript_mut();
        transcript.push_message(&self.renderer, &Message::user(query));
        let placeholder = transcript.push_loading(&self.renderer);

        self.turn = TurnState::Sending { placeholder };
        Some(QueryRequest {
            query: query.to_string(),
            session_id: self.store.current_id().map(str::to_string),
        })
    }

    /// Leaves `Sending` whatever the result and shows the answer or the error.
    pub fn finish_turn(&mut self, result: Result<QueryResponse, ChatError>) -> TurnOutcome {
        if let TurnState::Sending { placeholder, .. } = std::mem::replace(&mut self.turn, TurnState::Idle) {
            // The placeholder is gone if the user started a new chat meanwhile.
            self.store.transcript_mut().remove(placeholder);
        }

        match result {
            Ok(response) => {
                let answer = Message::assistant(response.answer, response.sources);
                self.store.transcript_mut().push_message(&self.renderer, &answer);
                let session_id = response.session_id.filter(|id| !id.is_empty());
                match &session_id {
                    Some(id) => {
                        self.store.commit_session(id.clone());
                        info!(session_id = %id, "Query answered");
                    }
                    None => {
                        // The next query asks the backend for a fresh session.
                        self.store.adopt_id(None);
                        warn!("Backend answered without a session id; not saving to history");
                    }
                }
                TurnOutcome::Success { session_id }
            }
            Err(error) => {
                warn!("Query failed: {error}");
                let message = Message::assistant(format!("Error: {error}"), Vec::new());
                self.store.transcript_mut().push_message(&self.renderer, &message);
                TurnOutcome::Failure { error }
            }
        }
    }

    /// One full turn against `api`. `None` when the input was ignored.
    pub async fn submit<A: ChatApi>(&mut self, api: &A, input: &str) -> Option<TurnOutcome> {
        let request = self.begin_turn(input)?;
        let result = api.query(&request).await;
        Some(self.finish_turn(result))
    }

    /// Saves the open conversation and starts a new one with the welcome message.
    pub fn new_session(&mut self) {
        self.store.create_session();
        let welcome = Message::welcome(WELCOME_TEXT);
        self.store.transcript_mut().push_message(&self.renderer, &welcome);
    }

    pub fn switch_to(&mut self, index: usize) -> bool {
        self.store.switch_to(index)
    }

    pub fn delete_session(&mut self, index: usize) -> bool {
        self.store.delete(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn answer(text: &str, session_id: &str) -> Result<QueryResponse, ChatError> {
        Ok(QueryResponse {
            answer: text.into(),
            session_id: Some(session_id.into()),
            sources: Vec::new(),
        })
    }

    #[test]
    fn starts_with_welcome_and_empty_history() {
        let chat = ChatController::default();
        assert!(chat.store().is_empty());
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.transcript().markup().contains("welcome-message"));
        assert!(!chat.is_sending());
    }

    #[test]
    fn whitespace_input_is_ignored() {
        let mut chat = ChatController::default();
        assert_eq!(chat.begin_turn("   \n\t"), None);
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.turn(), &TurnState::Idle);
    }

    #[test]
    fn begin_turn_trims_and_disables_input() {
        let mut chat = ChatController::default();
        let request = chat.begin_turn("  hello  ").unwrap();
        assert_eq!(request, QueryRequest { query: "hello".into(), session_id: None });
        assert!(chat.is_sending());
        assert_eq!(chat.transcript().len(), 3);
        assert!(chat.transcript().blocks()[2].is_loading());
    }

    #[test]
    fn second_submit_is_refused_while_sending() {
        let mut chat = ChatController::default();
        chat.begin_turn("first").unwrap();
        assert_eq!(chat.begin_turn("second"), None);
        assert_eq!(chat.transcript().len(), 3);
    }

    #[test]
    fn success_replaces_placeholder_and_commits() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        let outcome = chat.finish_turn(Ok(QueryResponse {
            answer: "Hi!".into(),
            session_id: Some("session_1".into()),
            sources: vec![Source::Plain("Lecture 1".into())],
        }));

        assert_eq!(outcome, TurnOutcome::Success { session_id: Some("session_1".into()) });
        assert!(!chat.is_sending());
        assert!(chat.transcript().blocks().iter().all(|b| !b.is_loading()));
        assert!(chat.transcript().markup().contains("sources-collapsible"));
        assert_eq!(chat.store().current_id(), Some("session_1"));
        assert_eq!(chat.store().current_index(), Some(0));
        assert_eq!(chat.sidebar()[0].title, "hello");
    }

    #[test]
    fn follow_up_sends_current_session_id() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        chat.finish_turn(answer("Hi!", "session_1"));

        let request = chat.begin_turn("and then?").unwrap();
        assert_eq!(request.session_id.as_deref(), Some("session_1"));
    }

    #[test]
    fn failure_shows_error_without_commit() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        let outcome = chat.finish_turn(Err(ChatError::QueryStatus { status: 500 }));

        assert!(!outcome.is_success());
        assert!(!chat.is_sending());
        assert!(chat.store().is_empty());
        let last = chat.transcript().blocks().last().unwrap();
        assert!(last.html().contains("Error: Query failed"));
        assert!(last.html().starts_with(r#"<div class="message assistant""#));
    }

    #[test]
    fn empty_session_id_is_not_committed() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        assert!(chat.finish_turn(answer("Hi!", "")).is_success());
        assert!(chat.store().is_empty());
    }

    #[test]
    fn answer_without_session_id_is_shown_but_not_committed() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        let response: QueryResponse =
            serde_json::from_str(r#"{"answer": "Hi from nowhere", "session_id": null}"#).unwrap();

        let outcome = chat.finish_turn(Ok(response));
        assert_eq!(outcome, TurnOutcome::Success { session_id: None });
        assert!(chat.transcript().markup().contains("Hi from nowhere"));
        assert!(!chat.transcript().markup().contains("Error:"));
        assert!(chat.store().is_empty());
    }

    #[test]
    fn answer_without_session_id_drops_the_current_id() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        chat.finish_turn(answer("Hi!", "session_1"));

        chat.begin_turn("again").unwrap();
        let response: QueryResponse = serde_json::from_str(r#"{"answer": "Hi again"}"#).unwrap();
        chat.finish_turn(Ok(response));

        assert_eq!(chat.store().current_id(), None);
        assert_eq!(chat.store().len(), 1);
        assert_eq!(chat.begin_turn("third").unwrap().session_id, None);
    }

    #[test]
    fn late_answer_lands_in_new_chat() {
        let mut chat = ChatController::default();
        chat.begin_turn("hello").unwrap();
        chat.new_session();
        assert!(chat.is_sending());

        chat.finish_turn(answer("Hi!", "session_1"));
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(chat.store().len(), 1);
    }
}
