use crate::core::errors::ExchangeError;
use crate::core::kernel::nonce::{Clock, NonceLease, NonceSequencer, SystemClock};
use crate::core::kernel::signer::Signer;
use std::sync::Arc;

/// Authenticated session state: credentials plus the nonce sequence
///
/// A session serializes its signed requests. [`Session::begin`] returns a
/// [`SigningSlot`] that keeps the single-flight lock; no other signed call on
/// the same session can draw a nonce until the slot is dropped. Callers hold
/// the slot until the HTTP exchange it authenticated has finished.
pub struct Session<C: Clock = SystemClock> {
    signer: Arc<dyn Signer>,
    nonces: NonceSequencer<C>,
}

impl Session<SystemClock> {
    pub fn new(signer: Arc<dyn Signer>) -> Self {
        Self::with_clock(signer, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(signer: Arc<dyn Signer>, clock: C) -> Self {
        Self {
            signer,
            nonces: NonceSequencer::with_clock(clock),
        }
    }

    /// Draw a nonce, sign it, and keep the session locked
    ///
    /// May stall for up to a second when the previous signed call happened
    /// in the same wall-clock second.
    pub async fn begin(&self) -> Result<SigningSlot<'_, C>, ExchangeError> {
        let mut lease = self.nonces.acquire().await;
        let nonce = lease.next_nonce().await;
        let auth_fields = self.signer.sign_request(nonce)?;

        Ok(SigningSlot {
            nonce,
            auth_fields,
            _lease: lease,
        })
    }

    /// Last nonce used by this session, zero before the first signed call
    pub async fn last_nonce(&self) -> u64 {
        self.nonces.last_nonce().await
    }
}

impl<C: Clock> std::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("nonces", &self.nonces)
            .finish_non_exhaustive()
    }
}

/// One signed request in flight
pub struct SigningSlot<'a, C: Clock> {
    nonce: u64,
    auth_fields: Vec<(String, String)>,
    _lease: NonceLease<'a, C>,
}

impl<C: Clock> SigningSlot<'_, C> {
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Authentication fields that lead the request body
    pub fn auth_fields(&self) -> &[(String, String)] {
        &self.auth_fields
    }
}
