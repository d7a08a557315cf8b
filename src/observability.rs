use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("folio.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("folio.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("folio.client.request_duration_seconds");

pub(crate) static COMPLETION_REPLIES: Counter = Counter::new("folio.completion.replies");
pub(crate) static COMPLETION_EMPTY_REPLIES: Counter =
    Counter::new("folio.completion.empty_replies");
pub(crate) static COMPLETION_FAILURES: Counter = Counter::new("folio.completion.failures");

pub(crate) static SESSION_SUBMISSIONS: Counter = Counter::new("folio.session.submissions");
pub(crate) static SESSION_DROPPED_BUSY: Counter = Counter::new("folio.session.dropped_busy");
pub(crate) static SESSION_DROPPED_EMPTY: Counter = Counter::new("folio.session.dropped_empty");
pub(crate) static SESSION_TURN_DURATION: Moments =
    Moments::new("folio.session.turn_duration_seconds");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&COMPLETION_REPLIES);
    collector.register_counter(&COMPLETION_EMPTY_REPLIES);
    collector.register_counter(&COMPLETION_FAILURES);

    collector.register_counter(&SESSION_SUBMISSIONS);
    collector.register_counter(&SESSION_DROPPED_BUSY);
    collector.register_counter(&SESSION_DROPPED_EMPTY);
    collector.register_moments(&SESSION_TURN_DURATION);
}
