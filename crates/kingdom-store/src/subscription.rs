use tokio::sync::mpsc::{self, error::TryRecvError};

/// A live stream of snapshots.
///
/// Every message is a complete state, so consumers that fall behind only
/// need the newest one; see [`try_latest`](Subscription::try_latest).
/// Dropping the subscription unsubscribes.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Creates a subscription and the sender the store publishes into.
    pub fn channel() -> (mpsc::UnboundedSender<T>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Waits for the next snapshot. `None` once the store hangs up.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Drains everything delivered so far and returns the newest snapshot,
    /// or `None` if nothing new arrived.
    pub fn try_latest(&mut self) -> Option<T> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return latest,
            }
        }
    }

    /// Stops receiving. Equivalent to dropping.
    pub fn unsubscribe(mut self) {
        self.rx.close();
    }
}
