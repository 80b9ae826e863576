//! Configuration module for quizbot.

use serde::Deserialize;
use std::path::Path;

use crate::{QuizbotError, Result};

/// Trivia game configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaConfig {
    /// Path to the question corpus file.
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
    /// Chat command that starts a new question.
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Duration of each timer stage (question -> hint -> reveal) in seconds.
    #[serde(default = "default_timer_secs")]
    pub timer_secs: u64,
    /// Fraction of the answer's letters revealed by the hint.
    #[serde(default = "default_hint_fraction")]
    pub hint_fraction: f64,
}

fn default_questions_file() -> String {
    "questions.txt".to_string()
}

fn default_trigger() -> String {
    "!trivia".to_string()
}

fn default_timer_secs() -> u64 {
    13
}

fn default_hint_fraction() -> f64 {
    0.25
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            questions_file: default_questions_file(),
            trigger: default_trigger(),
            timer_secs: default_timer_secs(),
            hint_fraction: default_hint_fraction(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty string disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/quizbot.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Trivia game settings.
    #[serde(default)]
    pub trivia: TriviaConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(QuizbotError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| QuizbotError::Config(format!("config parse error: {e}")))
    }
}
