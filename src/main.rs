use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use quizbot::{Config, QuestionStore, RoomEvent, RoomMessenger, SessionOptions, TriviaSession};

/// Messenger that prints outbound messages to stdout.
///
/// Stands in for a real chat client; inbound events come from stdin.
struct ConsoleMessenger;

#[async_trait]
impl RoomMessenger for ConsoleMessenger {
    async fn send_text(&self, room_id: &str, text: &str) {
        println!("[{room_id}] {text}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = quizbot::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        quizbot::logging::init_console_only(&config.logging.level);
    }

    info!("quizbot - trivia game engine");

    // No questions means the game cannot run at all
    let store = match QuestionStore::load(&config.trivia.questions_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Failed to load questions from {}: {e}",
                config.trivia.questions_file
            );
            return ExitCode::FAILURE;
        }
    };
    info!(
        questions = store.len(),
        file = %config.trivia.questions_file,
        "question corpus loaded"
    );

    let options = SessionOptions::from(&config.trivia);
    let session = match TriviaSession::new(store, Arc::new(ConsoleMessenger), options) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            eprintln!("Failed to start trivia session: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Console front end: each stdin line is an inbound event from a
    // single local player
    println!("Type {} to start a question.", config.trivia.trigger);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let event = RoomEvent::new("console", "player", line);
        session.on_message(&event).await;
    }

    ExitCode::SUCCESS
}
