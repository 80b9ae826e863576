//! Shared test helpers for quizbot end-to-end tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quizbot::{QuestionStore, RoomMessenger, SessionOptions, TriviaSession};

/// Messenger double that records every outbound message.
pub struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
        })
    }

    /// All messages sent so far, as (room_id, text) pairs.
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl RoomMessenger for RecordingMessenger {
    async fn send_text(&self, room_id: &str, text: &str) {
        self.sent
            .lock()
            .await
            .push((room_id.to_string(), text.to_string()));
    }
}

/// Per-stage timer duration used by scenario tests.
pub const STAGE_DELAY: Duration = Duration::from_millis(100);

/// Build a session over the given corpus lines with short timers.
pub fn test_session(lines: &[&str]) -> (Arc<TriviaSession>, Arc<RecordingMessenger>) {
    let store = QuestionStore::from_lines(lines.iter().copied());
    let messenger = RecordingMessenger::new();
    let options = SessionOptions {
        trigger: "!trivia".to_string(),
        stage_delay: STAGE_DELAY,
        hint_fraction: 0.25,
    };
    let session = Arc::new(TriviaSession::new(store, messenger.clone(), options).unwrap());
    (session, messenger)
}
