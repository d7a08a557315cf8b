//! Logging trait for completion traffic.
//!
//! The completion client absorbs every failure into a canned reply, so the
//! only place a failure is still visible is the [`CompletionLogger`] attached
//! to it.

use crate::error::Error;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// A trait for logging completion requests and their outcomes.
///
/// Implement this trait to capture what the assistant sends and receives.
///
/// # Example
///
/// ```rust,ignore
/// use folio::{CompletionLogger, Error, GenerateContentRequest, GenerateContentResponse};
///
/// struct CountingLogger(std::sync::atomic::AtomicUsize);
///
/// impl CompletionLogger for CountingLogger {
///     fn log_request(&self, _: &GenerateContentRequest) {}
///     fn log_response(&self, _: &GenerateContentResponse) {}
///     fn log_error(&self, _: &Error) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
/// }
/// ```
pub trait CompletionLogger: Send + Sync {
    /// Log an outgoing request, after the persona and history are attached.
    fn log_request(&self, request: &GenerateContentRequest);

    /// Log a successful response, including empty ones.
    fn log_response(&self, response: &GenerateContentResponse);

    /// Log a failure that is about to be replaced by the fallback reply.
    fn log_error(&self, error: &Error);
}

/// Writes absorbed failures to stderr and ignores successful traffic.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogger;

impl CompletionLogger for StderrLogger {
    fn log_request(&self, _: &GenerateContentRequest) {}

    fn log_response(&self, _: &GenerateContentResponse) {}

    fn log_error(&self, error: &Error) {
        eprintln!("completion service error: {error}");
    }
}

/// Writes every request and response to stderr as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceLogger;

impl CompletionLogger for TraceLogger {
    fn log_request(&self, request: &GenerateContentRequest) {
        if let Ok(json) = serde_json::to_string(request) {
            eprintln!("request: {json}");
        }
    }

    fn log_response(&self, response: &GenerateContentResponse) {
        if let Ok(json) = serde_json::to_string(response) {
            eprintln!("response: {json}");
        }
    }

    fn log_error(&self, error: &Error) {
        eprintln!("completion service error: {error}");
    }
}
