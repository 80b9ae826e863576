//! Question records and the corpus loader.
//!
//! The corpus is a plain-text file with one question per line. Fields are
//! delimited by `*`: the first field is the prompt, each remaining field
//! is an accepted answer. The prompt may carry a `($N)` point-value
//! marker anywhere in its text.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::Result;

/// Point value used when a prompt carries no `($N)` marker.
pub const DEFAULT_SCORE: u32 = 200;

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\$([0-9]+)\)").unwrap());

/// A single trivia question.
///
/// Immutable after parsing; shared read-only by the sampler and the
/// session for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text, shown verbatim (score marker included).
    pub text: String,
    /// Point value parsed from the `($N)` marker, or [`DEFAULT_SCORE`].
    pub score: u32,
    /// Accepted answers in corpus order. The first entry is the primary
    /// answer used for hint generation.
    pub answers: Vec<String>,
}

impl Question {
    /// Parse a corpus line into a question.
    ///
    /// A marker that fails integer parsing is treated the same as a
    /// missing marker. A line with no `*` delimiter yields an empty
    /// answer list; such a question can never be answered correctly.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split('*');
        let text = parts.next().unwrap_or_default().to_string();
        let answers: Vec<String> = parts.map(str::to_string).collect();
        let score = SCORE_RE
            .captures(&text)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(DEFAULT_SCORE);
        Self {
            text,
            score,
            answers,
        }
    }

    /// The primary accepted answer, if the question has any.
    pub fn primary_answer(&self) -> Option<&str> {
        self.answers.first().map(String::as_str)
    }
}

/// Immutable collection of questions loaded from a corpus file.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Load a store from a corpus file, one question per non-empty line.
    ///
    /// Fails if the file cannot be read; a missing corpus is fatal to
    /// startup. Lines without answers are kept but logged as a
    /// data-quality warning.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Build a store from an iterator of corpus lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let questions: Vec<Question> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(Question::parse)
            .collect();

        for (index, question) in questions.iter().enumerate() {
            if question.answers.is_empty() {
                warn!(index, text = %question.text, "question has no answers");
            }
        }

        Self { questions }
    }

    /// Number of questions in the store.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the store holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get a question by index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate over all questions in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
