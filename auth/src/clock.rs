use chrono::DateTime;
use chrono::Utc;

/// Source of the current UTC time.
///
/// Token expiry is a function of the clock; injecting it keeps expiry
/// behavior deterministic in tests without real sleeping.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
