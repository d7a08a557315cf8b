use serde::Serialize;

use crate::types::Turn;

/// Number of trailing turns sent as context with each new prompt.
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;

/// The ordered history of turns for one chat session.
///
/// A transcript is append-only: turns can be pushed and read but never
/// edited or removed. It lives only as long as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with a single assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push(Turn::assistant(greeting));
        transcript
    }

    /// Append a turn to the end of the conversation.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in conversation order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent `size` turns, oldest first.
    pub fn window(&self, size: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(size);
        &self.turns[start..]
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate over turns in conversation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
