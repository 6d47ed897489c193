//! Existence polling
//!
//! The board root renders at some unknown point after navigation. The probe
//! runs on a fixed interval, yielding between attempts, and retries without
//! bound; callers that need cancellation race the returned future against
//! their cancellation source (for the controller, the next navigation
//! event).

use std::time::Duration;

/// Poll `probe` until it yields a value
pub async fn poll_until<T, F>(interval: Duration, mut probe: F) -> T
where
    F: FnMut() -> Option<T>,
{
    loop {
        if let Some(found) = probe() {
            return found;
        }
        tokio::time::sleep(interval).await;
    }
}
