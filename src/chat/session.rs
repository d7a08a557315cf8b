//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the transcript,
//! enforces one outstanding request at a time, and turns each accepted
//! submission into exactly one assistant turn.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::chat::config::ChatConfig;
use crate::client::Gemini;
use crate::client_logger::{CompletionLogger, StderrLogger, TraceLogger};
use crate::completion::{Completer, CompletionClient, FAILURE_FALLBACK, normalize_reply};
use crate::error::Result;
use crate::observability::{
    SESSION_DROPPED_BUSY, SESSION_DROPPED_EMPTY, SESSION_SUBMISSIONS, SESSION_TURN_DURATION,
};
use crate::types::{DEFAULT_CONTEXT_WINDOW, Speaker, Transcript, Turn};

/// What happened to a call to [`ChatSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The input was blank; nothing was recorded or sent.
    Empty,

    /// A reply was already pending; the input was dropped, not queued.
    Busy,

    /// The input was recorded and answered with this assistant turn.
    Replied(Turn),
}

/// Request state of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to accept a submission.
    Idle,

    /// One request is outstanding.
    AwaitingReply,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Total turns in the transcript, greeting included.
    pub turn_count: usize,
    /// Turns spoken by the visitor.
    pub user_turns: usize,
    /// Turns spoken by the assistant.
    pub assistant_turns: usize,
    /// Submissions that produced a request.
    pub accepted: u64,
    /// Submissions dropped because a reply was pending.
    pub dropped_busy: u64,
    /// Submissions dropped because they were blank.
    pub dropped_empty: u64,
    /// Turns of context sent with each request.
    pub context_window: usize,
}

/// A chat session that owns the transcript and talks to a completer.
///
/// `submit` takes `&self` so that a front-end can hold the session while a
/// reply is pending; the busy flag, not exclusive borrowing, is what keeps
/// a second request from starting.
///
/// # Example
///
/// ```
/// use folio::chat::{ChatSession, Submission};
/// use folio::{Completer, Result, Turn};
///
/// struct Shout;
///
/// #[async_trait::async_trait]
/// impl Completer for Shout {
///     async fn complete(&self, prompt: &str, _: &[Turn]) -> Result<String> {
///         Ok(prompt.to_uppercase())
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let session = ChatSession::new(Shout, "Hello!");
/// let outcome = session.submit("hi").await;
/// assert_eq!(outcome, Submission::Replied(Turn::assistant("HI")));
/// assert_eq!(session.turn_count(), 3);
/// # });
/// ```
pub struct ChatSession<C: Completer = CompletionClient> {
    completer: C,
    transcript: Mutex<Transcript>,
    busy: AtomicBool,
    context_window: usize,
    accepted: AtomicU64,
    dropped_busy: AtomicU64,
    dropped_empty: AtomicU64,
    logger: Option<Arc<dyn CompletionLogger>>,
}

impl ChatSession<CompletionClient> {
    /// Creates a session backed by the HTTP completion client described by
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built. A missing credential is not an error.
    pub fn connect(config: &ChatConfig) -> Result<Self> {
        let client = Gemini::with_options(None, config.base_url.clone(), config.timeout)?;
        let logger: Arc<dyn CompletionLogger> = if config.trace {
            Arc::new(TraceLogger)
        } else {
            Arc::new(StderrLogger)
        };
        let completion =
            CompletionClient::new(client, config.persona.clone()).with_logger(logger);
        Ok(Self::with_context_window(
            completion,
            config.persona.greeting.clone(),
            config.context_window,
        ))
    }
}

impl<C: Completer> ChatSession<C> {
    /// Creates a session whose transcript starts with `greeting`.
    pub fn new(completer: C, greeting: impl Into<String>) -> Self {
        Self::with_context_window(completer, greeting, DEFAULT_CONTEXT_WINDOW)
    }

    /// Creates a session with a custom context window.
    pub fn with_context_window(
        completer: C,
        greeting: impl Into<String>,
        context_window: usize,
    ) -> Self {
        Self {
            completer,
            transcript: Mutex::new(Transcript::with_greeting(greeting)),
            busy: AtomicBool::new(false),
            context_window,
            accepted: AtomicU64::new(0),
            dropped_busy: AtomicU64::new(0),
            dropped_empty: AtomicU64::new(0),
            logger: None,
        }
    }

    /// Attaches a logger that sees completer errors the session absorbs.
    pub fn with_logger(mut self, logger: Arc<dyn CompletionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sends a visitor message and records the assistant's answer.
    ///
    /// This method:
    /// 1. Drops blank input and input that arrives while a reply is pending
    /// 2. Appends the visitor turn immediately
    /// 3. Sends the input with the turns that preceded it (at most the
    ///    context window) to the completer
    /// 4. Appends the reply, or a fixed fallback if the completer failed or
    ///    returned nothing
    ///
    /// Failures are never returned; the worst case is an apology turn. A
    /// future dropped mid-request also leaves the failure fallback behind.
    pub async fn submit(&self, user_text: &str) -> Submission {
        if user_text.trim().is_empty() {
            SESSION_DROPPED_EMPTY.click();
            self.dropped_empty.fetch_add(1, Ordering::Relaxed);
            return Submission::Empty;
        }
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            SESSION_DROPPED_BUSY.click();
            self.dropped_busy.fetch_add(1, Ordering::Relaxed);
            return Submission::Busy;
        };
        SESSION_SUBMISSIONS.click();
        self.accepted.fetch_add(1, Ordering::Relaxed);

        let history = {
            let mut transcript = self.lock_transcript();
            let history = transcript.window(self.context_window).to_vec();
            transcript.push(Turn::user(user_text));
            history
        };
        // Declared after `_busy` so it drops first: the fallback turn lands
        // before the flag clears.
        let pending = PendingReply::new(&self.transcript);

        let start = Instant::now();
        let reply = match self.completer.complete(user_text, &history).await {
            Ok(text) => normalize_reply(text),
            Err(err) => {
                if let Some(logger) = &self.logger {
                    logger.log_error(&err);
                }
                FAILURE_FALLBACK.to_string()
            }
        };
        SESSION_TURN_DURATION.add(start.elapsed().as_secs_f64());

        Submission::Replied(pending.answer(reply))
    }

    /// Returns a snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    /// Returns the number of turns in the conversation.
    pub fn turn_count(&self) -> usize {
        self.lock_transcript().len()
    }

    /// Returns the turns that would accompany the next submission.
    pub fn context(&self) -> Vec<Turn> {
        self.lock_transcript().window(self.context_window).to_vec()
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Current request state.
    pub fn state(&self) -> SessionState {
        if self.is_busy() {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    /// Turns of context sent with each request.
    pub fn context_window(&self) -> usize {
        self.context_window
    }

    /// The completer replies come from.
    pub fn completer(&self) -> &C {
        &self.completer
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        let transcript = self.lock_transcript();
        let user_turns = transcript
            .iter()
            .filter(|turn| turn.speaker() == Speaker::User)
            .count();
        SessionStats {
            turn_count: transcript.len(),
            user_turns,
            assistant_turns: transcript.len() - user_turns,
            accepted: self.accepted.load(Ordering::Relaxed),
            dropped_busy: self.dropped_busy.load(Ordering::Relaxed),
            dropped_empty: self.dropped_empty.load(Ordering::Relaxed),
            context_window: self.context_window,
        }
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the busy flag for the duration of one request and clears it on
/// drop, including when the submitting future is dropped mid-flight.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Owes the transcript one assistant turn. If the submitting future is
/// dropped before the reply arrives, the failure fallback is recorded so
/// turns keep alternating.
struct PendingReply<'a> {
    transcript: &'a Mutex<Transcript>,
    answered: bool,
}

impl<'a> PendingReply<'a> {
    fn new(transcript: &'a Mutex<Transcript>) -> Self {
        Self {
            transcript,
            answered: false,
        }
    }

    fn answer(mut self, reply: String) -> Turn {
        let turn = Turn::assistant(reply);
        self.push(turn.clone());
        self.answered = true;
        turn
    }

    fn push(&self, turn: Turn) {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(turn);
    }
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        if !self.answered {
            self.push(Turn::assistant(FAILURE_FALLBACK));
        }
    }
}
