use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::entities::ReportingContext;

/// Sending half: hand one to every control (vessel, year, month, mode) that
/// can change the reporting context.
#[derive(Debug, Clone)]
pub struct RecomputeTrigger {
    sender: mpsc::UnboundedSender<ReportingContext>,
}

/// Receiving half: owned by the loop that recomputes summaries.
#[derive(Debug)]
pub struct RecomputeListener {
    receiver: mpsc::UnboundedReceiver<ReportingContext>,
    delay: Duration,
}

pub fn recompute_channel(delay: Duration) -> (RecomputeTrigger, RecomputeListener) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        RecomputeTrigger { sender },
        RecomputeListener { receiver, delay },
    )
}

impl RecomputeTrigger {
    /// Returns false once the listener has been dropped.
    pub fn request(&self, ctx: ReportingContext) -> bool {
        self.sender.send(ctx).is_ok()
    }
}

impl RecomputeListener {
    /// Waits for a request, then keeps absorbing newer ones until the channel
    /// has been quiet for the debounce delay. Yields only the latest context.
    /// Returns None once every trigger has been dropped and the queue is empty.
    pub async fn settled(&mut self) -> Option<ReportingContext> {
        let mut latest = self.receiver.recv().await?;
        let mut absorbed = 0usize;
        loop {
            match tokio::time::timeout(self.delay, self.receiver.recv()).await {
                Ok(Some(next)) => {
                    latest = next;
                    absorbed += 1;
                }
                Ok(None) | Err(_) => break,
            }
        }
        debug!(absorbed, "recompute request settled");
        Some(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Vessel;

    fn ctx(month: u32) -> ReportingContext {
        ReportingContext::monthly(Vessel::new("V1", "Aurora", "North"), 2025, month)
    }

    #[tokio::test]
    async fn rapid_requests_collapse_into_latest() {
        let (trigger, mut listener) = recompute_channel(Duration::from_millis(20));
        trigger.request(ctx(1));
        trigger.request(ctx(2));
        trigger.request(ctx(3));
        assert_eq!(listener.settled().await, Some(ctx(3)));
    }

    #[tokio::test]
    async fn dropped_triggers_end_the_stream() {
        let (trigger, mut listener) = recompute_channel(Duration::from_millis(5));
        trigger.request(ctx(4));
        drop(trigger);
        assert_eq!(listener.settled().await, Some(ctx(4)));
        assert_eq!(listener.settled().await, None);
    }

    #[tokio::test]
    async fn request_fails_once_listener_is_gone() {
        let (trigger, listener) = recompute_channel(Duration::from_millis(5));
        drop(listener);
        assert!(!trigger.request(ctx(1)));
    }
}
