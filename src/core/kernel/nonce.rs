use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// How long a signer waits when the clock has not moved past the last nonce
pub const NONCE_STALL: Duration = Duration::from_secs(1);

/// Source of the candidate nonce, in whole seconds
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

/// Wall-clock seconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// Strictly increasing, second-resolution nonce source
///
/// The service wants a larger nonce on every signed call and allows roughly
/// one request per second (600 per 10 minutes), so the current Unix time is
/// used as the nonce. When two signed calls fall into the same second the
/// second one stalls for [`NONCE_STALL`] and reads the clock again.
///
/// The last committed nonce sits behind an async mutex and a caller holds it
/// through the whole read/stall/commit sequence, so concurrent callers on one
/// sequencer cannot both observe the same stale value.
///
/// # Warning
///
/// Uniqueness only holds per sequencer. Two sequencers (two clients, or two
/// processes) using the same API key can compute the same nonce in the same
/// second; the service rejects the second request and may flag the account.
/// Share one client per key.
pub struct NonceSequencer<C: Clock = SystemClock> {
    clock: C,
    last_nonce: Mutex<u64>,
}

impl NonceSequencer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NonceSequencer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NonceSequencer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last_nonce: Mutex::new(0),
        }
    }

    /// Take the single-flight lock
    ///
    /// Waits for any other holder to release its [`NonceLease`].
    pub async fn acquire(&self) -> NonceLease<'_, C> {
        NonceLease {
            clock: &self.clock,
            last_nonce: self.last_nonce.lock().await,
        }
    }

    /// Acquire the lock, draw one nonce and release the lock
    pub async fn next_nonce(&self) -> u64 {
        self.acquire().await.next_nonce().await
    }

    /// Last nonce committed, zero before the first signed call
    pub async fn last_nonce(&self) -> u64 {
        *self.last_nonce.lock().await
    }
}

impl<C: Clock> std::fmt::Debug for NonceSequencer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceSequencer").finish_non_exhaustive()
    }
}

/// Exclusive access to a [`NonceSequencer`]
///
/// Dropping the lease lets the next caller draw a nonce.
pub struct NonceLease<'a, C: Clock> {
    clock: &'a C,
    last_nonce: MutexGuard<'a, u64>,
}

impl<C: Clock> NonceLease<'_, C> {
    /// Draw the next nonce and commit it
    ///
    /// Stalls (not cancellable by the sequencer itself) while the clock reads
    /// a value not greater than the last committed nonce.
    pub async fn next_nonce(&mut self) -> u64 {
        let mut candidate = self.clock.now_secs();
        while candidate <= *self.last_nonce {
            debug!(
                candidate,
                last_nonce = *self.last_nonce,
                "nonce collision, stalling"
            );
            tokio::time::sleep(NONCE_STALL).await;
            candidate = self.clock.now_secs();
        }

        *self.last_nonce = candidate;
        candidate
    }
}
