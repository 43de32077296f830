use std::time::{SystemTime, UNIX_EPOCH};

/// Time source injected into step construction.
///
/// Passed explicitly so selection stays deterministic and tests never have
/// to mock the wall clock. Selection itself never reads it; only the
/// bootstrap step consults it, and only for its fallback service name.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock backed [`Clock`] used outside of tests.
#[derive(Default, Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
