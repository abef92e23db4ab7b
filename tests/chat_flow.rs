//! End-to-end chat flows against an in-memory backend.
//! Drives the controller and stats panel exactly as the frontend does.

use std::cell::RefCell;
use std::collections::VecDeque;

use course_chat::{
    ChatApi, ChatController, ChatError, CourseStats, QueryRequest, QueryResponse, StatsPanel, TurnOutcome,
};

#[derive(Default)]
struct FakeApi {
    answers: RefCell<VecDeque<Result<QueryResponse, ChatError>>>,
    stats: RefCell<Option<Result<CourseStats, ChatError>>>,
    requests: RefCell<Vec<QueryRequest>>,
}

impl FakeApi {
    fn answering(answers: Vec<Result<QueryResponse, ChatError>>) -> Self {
        Self { answers: RefCell::new(answers.into()), ..Self::default() }
    }

    fn with_stats(self, stats: Result<CourseStats, ChatError>) -> Self {
        *self.stats.borrow_mut() = Some(stats);
        self
    }

    fn requests(&self) -> Vec<QueryRequest> {
        self.requests.borrow().clone()
    }
}

impl ChatApi for FakeApi {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ChatError> {
        self.requests.borrow_mut().push(request.clone());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::transport("Failed to fetch")))
    }

    async fn course_stats(&self) -> Result<CourseStats, ChatError> {
        self.stats
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ChatError::StatsStatus { status: 500 }))
    }
}

fn answer(text: &str, session_id: &str) -> Result<QueryResponse, ChatError> {
    let json = serde_json::json!({
        "answer": text,
        "session_id": session_id,
        "sources": ["Lecture 1", {"source": "Lecture 2", "link": "https://x"}],
    });
    Ok(serde_json::from_value(json).unwrap())
}

#[tokio::test]
async fn fresh_load_then_first_question() {
    let api = FakeApi::answering(vec![answer("Hello! Ask me about courses.", "session_1")]).with_stats(Ok(
        CourseStats { total_courses: 2, course_titles: vec!["Course A".into(), "Course B".into()] },
    ));

    let stats = StatsPanel::load(&api).await;
    assert_eq!(stats.view().total, "2");
    assert_eq!(stats.view().titles.len(), 2);

    let mut chat = ChatController::default();
    assert!(chat.transcript().markup().contains("Welcome to the Course Materials Assistant!"));
    assert!(chat.store().is_empty());

    let request = chat.begin_turn("hello").unwrap();
    assert!(chat.is_sending());
    assert!(chat.transcript().markup().contains(r#"<div class="loading">"#));

    let result = api.query(&request).await;
    let outcome = chat.finish_turn(result);
    assert_eq!(outcome, TurnOutcome::Success { session_id: Some("session_1".into()) });
    assert!(!chat.is_sending());

    let markup = chat.transcript().markup();
    assert!(!markup.contains(r#"<div class="loading">"#));
    assert!(markup.contains("Hello! Ask me about courses."));
    assert!(markup.contains(r#"<span class="sources-count">(2)</span>"#));
    assert!(markup.contains(r#"href="https://x""#));

    let sidebar = chat.sidebar();
    assert_eq!(sidebar.len(), 1);
    assert_eq!(sidebar[0].title, "hello");
    assert!(sidebar[0].active);
}

#[tokio::test]
async fn each_submit_adds_one_user_and_one_assistant_message() {
    let api = FakeApi::answering(vec![answer("First.", "s1"), Err(ChatError::QueryStatus { status: 502 })]);
    let mut chat = ChatController::default();

    let before = chat.transcript().len();
    let outcome = chat.submit(&api, "What is photosynthesis?").await.unwrap();
    assert!(outcome.is_success());
    assert_eq!(chat.transcript().len(), before + 2);

    let outcome = chat.submit(&api, "And respiration?").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Failure { error: ChatError::QueryStatus { status: 502 } });
    assert_eq!(chat.transcript().len(), before + 4);
    assert!(!chat.is_sending());
    assert!(chat.transcript().markup().contains("Error: Query failed"));

    let requests = api.requests();
    assert_eq!(requests[0].session_id, None);
    assert_eq!(requests[1].session_id.as_deref(), Some("s1"));
    // Failed turns never reach the history.
    assert_eq!(chat.store().len(), 1);
}

#[tokio::test]
async fn blank_input_sends_nothing() {
    let api = FakeApi::default();
    let mut chat = ChatController::default();
    assert!(chat.submit(&api, "   ").await.is_none());
    assert!(api.requests().is_empty());
    assert_eq!(chat.transcript().len(), 1);
}

#[tokio::test]
async fn transport_errors_are_shown_verbatim() {
    let api = FakeApi::default();
    let mut chat = ChatController::default();
    chat.submit(&api, "hello").await.unwrap();
    assert!(chat.transcript().markup().contains("Error: Failed to fetch"));
}

#[tokio::test]
async fn history_navigation_round_trip() {
    let long_question = "x".repeat(60);
    let api = FakeApi::answering(vec![answer("One.", "s1"), answer("Two.", "s2")]);
    let mut chat = ChatController::default();

    chat.submit(&api, "first chat").await.unwrap();
    chat.new_session();
    chat.submit(&api, &long_question).await.unwrap();

    let sidebar = chat.sidebar();
    assert_eq!(sidebar.len(), 2);
    assert_eq!(sidebar[1].title, format!("{}...", "x".repeat(50)));
    assert_eq!(sidebar.iter().filter(|e| e.active).count(), 1);

    assert!(chat.switch_to(0));
    assert!(chat.transcript().markup().contains("One."));
    assert_eq!(chat.store().current_id(), Some("s1"));

    assert!(!chat.switch_to(5));
    assert!(!chat.delete_session(5));

    assert!(chat.delete_session(0));
    assert_eq!(chat.store().current_index(), None);
    assert!(chat.transcript().is_empty());
    assert_eq!(chat.sidebar()[0].title, sidebar[1].title);
}

#[tokio::test]
async fn stats_failure_does_not_affect_chat() {
    let api = FakeApi::answering(vec![answer("Still here.", "s1")]);
    let stats = StatsPanel::load(&api).await;
    assert_eq!(stats.view().total, "0");

    let mut chat = ChatController::default();
    assert!(chat.submit(&api, "hello").await.unwrap().is_success());
}
