//! Exponential backoff policy for throttled responses.
//!
//! Used by the request executor when a 429 response arrives without a
//! usable `Retry-After` header. Delays grow exponentially from
//! [`Backoff::MIN_DELAY`] and are capped at [`Backoff::MAX_DELAY`] per
//! attempt.

use rand::Rng;
use std::time::Duration;

/// Exponential backoff between retry attempts.
///
/// Each attempt waits `MIN_DELAY * 2^(attempt - 1)`, capped at
/// `MAX_DELAY`. With jitter enabled the delay is scaled by a random
/// factor in `[0.5, 1.0]` to avoid thundering-herd retries.
///
/// # Examples
///
/// ```
/// use restpath::Backoff;
/// use std::time::Duration;
///
/// let backoff = Backoff::fixed();
/// assert_eq!(backoff.delay_for_attempt(1), Duration::from_millis(100));
/// assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(200));
/// assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(400));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Backoff {
    jitter: bool,
}

impl Backoff {
    /// The delay before the first retry.
    pub const MIN_DELAY: Duration = Duration::from_millis(100);
    /// The maximum delay for any single attempt.
    pub const MAX_DELAY: Duration = Duration::from_millis(20_000);

    /// Creates a backoff policy with jitter enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { jitter: true }
    }

    /// Creates a deterministic backoff policy with jitter disabled.
    #[must_use]
    pub const fn fixed() -> Self {
        Self { jitter: false }
    }

    /// Returns the delay before the given retry attempt (1-indexed).
    ///
    /// Attempt numbers of zero are treated as the first retry.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let multiplier = 2u32.saturating_pow(exponent);
        let delay = Self::MIN_DELAY
            .saturating_mul(multiplier)
            .min(Self::MAX_DELAY);

        if self.jitter {
            let factor = rand::thread_rng().gen_range(0.5..=1.0);
            delay.mul_f64(factor)
        } else {
            delay
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delays_grow_exponentially() {
        let backoff = Backoff::fixed();

        assert_eq!(backoff.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(200));
        assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(400));
        assert_eq!(backoff.delay_for_attempt(4), Duration::from_millis(800));
        assert_eq!(backoff.delay_for_attempt(5), Duration::from_millis(1600));
    }

    #[test]
    fn test_delay_is_capped_at_max() {
        let backoff = Backoff::fixed();

        // 100ms * 2^8 = 25600ms, beyond the cap
        assert_eq!(backoff.delay_for_attempt(9), Backoff::MAX_DELAY);
        assert_eq!(backoff.delay_for_attempt(32), Backoff::MAX_DELAY);
        assert_eq!(backoff.delay_for_attempt(u32::MAX), Backoff::MAX_DELAY);
    }

    #[test]
    fn test_attempt_zero_behaves_like_first_retry() {
        let backoff = Backoff::fixed();
        assert_eq!(backoff.delay_for_attempt(0), Duration::from_millis(100));
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let backoff = Backoff::new();
        for attempt in 1..=6 {
            let base = Backoff::fixed().delay_for_attempt(attempt);
            let jittered = backoff.delay_for_attempt(attempt);
            assert!(jittered >= base.mul_f64(0.5));
            assert!(jittered <= base);
        }
    }
}
