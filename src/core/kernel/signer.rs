use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Result type for signing operations: ordered authentication form fields
pub type SignatureResult = Result<Vec<(String, String)>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations turn a nonce into the authentication fields that lead the
/// request body. The nonce is handed in by the caller; a signer never picks
/// or remembers nonces itself.
pub trait Signer: Send + Sync {
    /// Sign a request for the given nonce
    ///
    /// # Returns
    /// The form fields to place, in order, at the start of the request body
    fn sign_request(&self, nonce: u64) -> SignatureResult;
}

/// Hex-encoded HMAC-SHA256 of `message` keyed with `secret`
pub fn hmac_sha256_hex(secret: &[u8], message: &[u8]) -> Result<String, ExchangeError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
