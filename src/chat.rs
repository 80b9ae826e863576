//! Room messaging boundary for quizbot.
//!
//! The trivia engine does not talk to any chat protocol directly. It
//! consumes a [`RoomMessenger`] capability for outbound text and receives
//! inbound text as validated [`RoomEvent`]s from the integration layer.

use async_trait::async_trait;

/// An inbound text message from a chat room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEvent {
    /// Room the message was sent in.
    pub room_id: String,
    /// Display name or ID of the sender.
    pub sender: String,
    /// Plain-text message body.
    pub body: String,
}

impl RoomEvent {
    /// Create a new room event.
    pub fn new(
        room_id: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }
}

/// Outbound messaging capability provided by the chat integration layer.
///
/// Sends are fire-and-forget from the engine's point of view; delivery
/// failures are the integration layer's concern.
#[async_trait]
pub trait RoomMessenger: Send + Sync {
    /// Send a plain-text message to a room.
    async fn send_text(&self, room_id: &str, text: &str);
}
