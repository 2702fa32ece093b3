use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("finsight.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("finsight.client.request_errors");

pub(crate) static LOGIN_ATTEMPTS: Counter = Counter::new("finsight.login.attempts");
pub(crate) static LOGIN_FAILURES: Counter = Counter::new("finsight.login.failures");

pub(crate) static CHAT_TURNS: Counter = Counter::new("finsight.chat.turns");
pub(crate) static CHAT_FALLBACKS: Counter = Counter::new("finsight.chat.fallbacks");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&LOGIN_ATTEMPTS);
    collector.register_counter(&LOGIN_FAILURES);

    collector.register_counter(&CHAT_TURNS);
    collector.register_counter(&CHAT_FALLBACKS);
}
