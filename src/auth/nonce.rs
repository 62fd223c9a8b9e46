//! Nonces for signed requests.
//!
//! Buda remembers the highest nonce it has seen for each API key and turns
//! away anything at or below it, so every value handed out here has to beat
//! the previous one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of nonces for the `x-sbtc-nonce` header.
///
/// Implementations are shared between concurrent requests and must never
/// hand out the same value twice or go backwards.
pub trait NonceProvider: Send + Sync {
    /// Return a nonce above every value this provider returned before.
    fn next_nonce(&self) -> u64;
}

/// Clock-driven nonce source.
///
/// Values are nanoseconds since the Unix epoch. When the clock has not moved
/// past the previous value (two calls in the same tick, or the system clock
/// stepping back) the previous value plus one is used instead.
pub struct IncreasingNonce {
    issued: AtomicU64,
}

impl IncreasingNonce {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    fn starting_after(floor: u64) -> Self {
        Self {
            issued: AtomicU64::new(floor),
        }
    }

    fn clock() -> u64 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        u64::try_from(since_epoch.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::clock();
        let mut previous = self.issued.load(Ordering::Acquire);
        loop {
            let candidate = now.max(previous.saturating_add(1));
            match self.issued.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(seen) => previous = seen,
            }
        }
    }
}
