//! quizbot - Trivia game engine for chat rooms
//!
//! Serves randomized questions to a shared room, accepts free-text
//! answers with fuzzy matching, and times out unanswered questions with
//! a progressive hint. The chat transport is abstracted behind the
//! [`chat::RoomMessenger`] capability.

pub mod chat;
pub mod config;
pub mod error;
pub mod logging;
pub mod trivia;

pub use chat::{RoomEvent, RoomMessenger};
pub use config::Config;
pub use error::{QuizbotError, Result};
pub use trivia::{
    Question, QuestionStore, SessionOptions, ShuffleSampler, TriviaSession, DEFAULT_SCORE,
};
