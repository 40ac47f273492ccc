//! Minimum-delay pacing between consecutive requests.
//!
//! The lookup endpoint is a shared legacy service; the reference harness
//! keeps exactly one request in flight and waits whole seconds between
//! calls. Retry-on-failure is deliberately not implemented here — the
//! protocol layer never retries, and a caller that wants retries supplies
//! its own policy on top.

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Enforces a minimum interval between consecutive calls to [`Pacer::wait`].
///
/// The first call returns immediately; each later call sleeps until at
/// least `min_delay` has passed since the previous one completed. Shared
/// access is serialized through a mutex, which also keeps paced requests
/// sequential.
pub struct Pacer {
    min_delay: Duration,
    last: Mutex<Option<Instant>>,
}

impl Pacer {
    #[must_use]
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last: Mutex::new(None),
        }
    }

    /// Sleeps as needed so that calls are at least `min_delay` apart.
    pub async fn wait(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            sleep_until(prev + self.min_delay).await;
        }
        *last = Some(Instant::now());
    }
}
