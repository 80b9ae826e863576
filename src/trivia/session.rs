//! Trivia session state machine.
//!
//! One session runs at most one question at a time. Posting a question
//! arms a two-stage timer chain: the first stage posts a hint, the second
//! reveals the answers and returns the session to idle. A correct answer
//! from any participant cancels whichever stage is pending.
//!
//! Phase and timer state live behind one lock so that answer checking and
//! timer expiry serialize; cancellation is epoch-based compare-and-cancel,
//! so a timer that already fired wins over a simultaneous correct answer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::info;

use crate::chat::{RoomEvent, RoomMessenger};
use crate::config::TriviaConfig;
use crate::{QuizbotError, Result};

use super::hint::hint;
use super::matcher;
use super::question::QuestionStore;
use super::sampler::ShuffleSampler;

/// Session phase. A question index is carried while one is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No question in play.
    Idle,
    /// Question posted, hint timer pending.
    Active { question: usize },
    /// Hint posted, reveal timer pending.
    Hinted { question: usize },
}

/// Mutable session state, guarded by the session lock.
#[derive(Debug)]
struct SessionState {
    phase: Phase,
    sampler: ShuffleSampler,
    /// Bumped whenever the pending timer chain is invalidated. An armed
    /// chain captures the epoch and no-ops if it moved by wake-up time.
    epoch: u64,
}

/// Tunable session behavior.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Chat command that starts a new question.
    pub trigger: String,
    /// Duration of each timer stage.
    pub stage_delay: Duration,
    /// Fraction of the answer's letters revealed by the hint.
    pub hint_fraction: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            trigger: "!trivia".to_string(),
            stage_delay: Duration::from_secs(13),
            hint_fraction: 0.25,
        }
    }
}

impl From<&TriviaConfig> for SessionOptions {
    fn from(config: &TriviaConfig) -> Self {
        Self {
            trigger: config.trigger.clone(),
            stage_delay: Duration::from_secs(config.timer_secs),
            hint_fraction: config.hint_fraction,
        }
    }
}

/// A trivia game session over one room-messaging capability.
pub struct TriviaSession {
    store: QuestionStore,
    messenger: Arc<dyn RoomMessenger>,
    options: SessionOptions,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for TriviaSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriviaSession")
            .field("store", &self.store)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TriviaSession {
    /// Create a session over a loaded question store.
    ///
    /// Fails if the store is empty; with no questions the game cannot
    /// operate.
    pub fn new(
        store: QuestionStore,
        messenger: Arc<dyn RoomMessenger>,
        options: SessionOptions,
    ) -> Result<Self> {
        if store.is_empty() {
            return Err(QuizbotError::Corpus("no questions loaded".to_string()));
        }
        let sampler = ShuffleSampler::new(store.len());
        Ok(Self {
            store,
            messenger,
            options,
            state: Mutex::new(SessionState {
                phase: Phase::Idle,
                sampler,
                epoch: 0,
            }),
        })
    }

    /// Build a session by loading the corpus at `path`.
    ///
    /// Fails if the corpus cannot be read or holds no questions.
    pub fn from_corpus<P: AsRef<std::path::Path>>(
        path: P,
        messenger: Arc<dyn RoomMessenger>,
        options: SessionOptions,
    ) -> Result<Self> {
        let store = QuestionStore::load(path)?;
        Self::new(store, messenger, options)
    }

    /// Handle one inbound room event.
    ///
    /// The trigger command draws a new question when the session is idle
    /// and is ignored otherwise. Any other message is treated as an
    /// answer attempt while a question is in play, and ignored when idle.
    pub async fn on_message(self: &Arc<Self>, event: &RoomEvent) {
        if event.body.trim() == self.options.trigger {
            self.new_question(&event.room_id).await;
        } else {
            self.check_answer(event).await;
        }
    }

    /// Whether a question is currently in play.
    pub async fn is_active(&self) -> bool {
        self.state.lock().await.phase != Phase::Idle
    }

    /// Hint for the active question's primary answer, or an empty string
    /// when idle or when the active question has no answers.
    pub async fn hint_active_question(&self, fraction: f64) -> String {
        let state = self.state.lock().await;
        match state.phase {
            Phase::Active { question } | Phase::Hinted { question } => self
                .primary_answer(question)
                .map(|answer| hint(answer, fraction))
                .unwrap_or_default(),
            Phase::Idle => String::new(),
        }
    }

    /// Draw and post a new question, arming the timer chain.
    ///
    /// No-op while a question is already in play.
    async fn new_question(self: &Arc<Self>, room_id: &str) {
        let (text, epoch) = {
            let mut state = self.state.lock().await;
            if state.phase != Phase::Idle {
                return;
            }
            let question = state.sampler.draw();
            state.phase = Phase::Active { question };
            state.epoch += 1;

            // Index comes from the sampler, always in range
            let q = self.store.question(question).unwrap();
            info!(answers = ?q.answers, "serving trivia question");
            (q.text.clone(), state.epoch)
        };

        self.messenger.send_text(room_id, &text).await;
        self.spawn_timer_chain(room_id.to_string(), epoch);
    }

    /// Check an answer attempt against the active question.
    ///
    /// The correct-answer transition is taken only if the pending timer
    /// chain is cancelled first; a chain that already fired wins.
    async fn check_answer(&self, event: &RoomEvent) {
        let ack = {
            let mut state = self.state.lock().await;
            let question = match state.phase {
                Phase::Active { question } | Phase::Hinted { question } => question,
                Phase::Idle => return,
            };
            let q = self.store.question(question).unwrap();
            if !matcher::matches(&event.body, &q.answers) {
                return;
            }

            // Cancel the pending chain; bumping the epoch makes it a
            // no-op when it wakes
            state.epoch += 1;
            state.phase = Phase::Idle;
            info!(
                room_id = %event.room_id,
                sender = %event.sender,
                message = %event.body,
                answers = ?q.answers,
                "correct answer provided"
            );
            format!(
                "{} is correct! Answers: {}",
                event.sender,
                q.answers.join(", ")
            )
        };

        self.messenger.send_text(&event.room_id, &ack).await;
    }

    /// Run the hint and reveal stages for the question armed at `epoch`.
    ///
    /// Each stage re-checks the epoch under the lock after sleeping, so a
    /// correct answer (or anything else that moved the epoch) silently
    /// stops the chain.
    fn spawn_timer_chain(self: &Arc<Self>, room_id: String, epoch: u64) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(session.options.stage_delay).await;
            let hint_text = {
                let mut state = session.state.lock().await;
                if state.epoch != epoch {
                    return;
                }
                let Phase::Active { question } = state.phase else {
                    return;
                };
                state.phase = Phase::Hinted { question };
                session
                    .primary_answer(question)
                    .map(|answer| hint(answer, session.options.hint_fraction))
                    .unwrap_or_default()
            };
            session
                .messenger
                .send_text(&room_id, &format!("Hint: {hint_text}"))
                .await;

            tokio::time::sleep(session.options.stage_delay).await;
            let reveal = {
                let mut state = session.state.lock().await;
                if state.epoch != epoch {
                    return;
                }
                let Phase::Hinted { question } = state.phase else {
                    return;
                };
                state.phase = Phase::Idle;
                state.epoch += 1;
                let q = session.store.question(question).unwrap();
                q.answers.join(", ")
            };
            session
                .messenger
                .send_text(&room_id, &format!("Time's up. Correct answers: {reveal}"))
                .await;
            info!("question timed out");
        });
    }

    fn primary_answer(&self, question: usize) -> Option<&str> {
        self.store.question(question).and_then(|q| q.primary_answer())
    }
}
