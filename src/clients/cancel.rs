//! Cooperative cancellation for in-flight requests.
//!
//! A [`CancelToken`] is a clonable latch. The request executor races every
//! network attempt and every backoff delay against it; once fired, the
//! pending request fails with [`ApiError::Aborted`](crate::ApiError::Aborted)
//! and no further attempts are made.

use std::sync::Arc;
use tokio::sync::watch;

/// A clonable cancellation latch.
///
/// All clones observe the same state. Cancellation is one-way: once fired,
/// a token stays cancelled.
///
/// # Examples
///
/// ```
/// use restpath::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    /// Creates a new, un-fired token.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Fires the token. Idempotent.
    pub fn cancel(&self) {
        let _ = self.sender.send(true);
    }

    /// Returns `true` if the token has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once the token fires. Resolves immediately if it already has.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // wait_for checks the current value before waiting, so a token that
        // fired before this call resolves without blocking. The sender can
        // not be dropped while `self` holds it, so the result is infallible
        // in practice.
        let _ = receiver.wait_for(|fired| *fired).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

// Verify CancelToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CancelToken>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_new_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_is_observed_by_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        token.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_immediately_when_already_fired() {
        let token = CancelToken::new();
        token.cancel();

        tokio::time::timeout(Duration::from_millis(50), token.cancelled())
            .await
            .expect("cancelled() should resolve immediately");
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_fire() {
        let token = CancelToken::new();
        let waiter = token.clone();

        let handle = tokio::spawn(async move {
            waiter.cancelled().await;
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
