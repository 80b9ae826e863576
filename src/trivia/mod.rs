//! Trivia game engine.
//!
//! Questions come from a flat corpus, are served in shuffled order
//! without replacement, and are answered with fuzzy matching. An
//! unanswered question gets a partial hint and then a timed reveal.

pub mod hint;
pub mod matcher;
pub mod question;
pub mod sampler;
pub mod session;

pub use question::{Question, QuestionStore, DEFAULT_SCORE};
pub use sampler::ShuffleSampler;
pub use session::{SessionOptions, TriviaSession};
