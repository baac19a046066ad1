/// Kernel - exchange-agnostic transport layer
///
/// The kernel holds everything that is about moving and authenticating
/// requests, and nothing that knows about particular endpoints.
///
/// # Components
///
/// - `RestClient` / `ReqwestRest`: public GETs and form-encoded private POSTs
/// - `Signer`: turns a nonce into the authentication form fields
/// - `NonceSequencer`: strictly increasing, second-resolution nonces
/// - `Session`: a signer plus its nonce sequence, signing one request at a time
///
/// # Nonce discipline
///
/// A `Session` lets at most one signed request be in flight. The next caller
/// waits for the previous exchange to finish, then draws a nonce; if the clock
/// still reads the previous nonce's second it stalls for one second first.
/// That keeps every nonce unique per session and the request rate at or below
/// roughly one signed call per second.
///
/// Uniqueness does not extend across sessions. Build one client per API key
/// and share it (the connector is cheap to clone and clones share the session).
///
/// # Example
/// ```rust,no_run
/// use cexio::core::kernel::*;
/// use cexio::exchanges::cexio::signer::CexSigner;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rest_config = RestClientConfig::new("https://cex.io/api".to_string(), "cexio".to_string());
/// let signer = Arc::new(CexSigner::new("user", "api_key", "api_secret"));
/// let rest = RestClientBuilder::new(rest_config)
///     .with_signer(signer)
///     .build()?;
///
/// let ticker = rest.get("/ticker/GHS/BTC").await?;
/// let balance = rest.post_form("/balance/", &[], true).await?;
/// # let _ = (ticker, balance);
/// # Ok(())
/// # }
/// ```
pub mod nonce;
pub mod rest;
pub mod session;
pub mod signer;

// Re-export key types for convenience
pub use nonce::{Clock, NonceLease, NonceSequencer, SystemClock, NONCE_STALL};
pub use rest::{build_form_body, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use session::{Session, SigningSlot};
pub use signer::{hmac_sha256_hex, SignatureResult, Signer};
