use crate::core::errors::ExchangeError;
use crate::core::kernel::{hmac_sha256_hex, SignatureResult, Signer};
use secrecy::{ExposeSecret, Secret};

/// Signs private requests with the account's user id, key and secret
///
/// The signature is the upper-case hex HMAC-SHA256 of `nonce ‖ user ‖ key`,
/// keyed with the API secret.
pub struct CexSigner {
    user: String,
    api_key: Secret<String>,
    api_secret: Secret<String>,
}

impl CexSigner {
    pub fn new(
        user: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            api_key: Secret::new(api_key.into()),
            api_secret: Secret::new(api_secret.into()),
        }
    }

    pub fn signature(&self, nonce: u64) -> Result<String, ExchangeError> {
        let message = format!("{}{}{}", nonce, self.user, self.api_key.expose_secret());
        let digest = hmac_sha256_hex(
            self.api_secret.expose_secret().as_bytes(),
            message.as_bytes(),
        )?;
        Ok(digest.to_uppercase())
    }
}

impl Signer for CexSigner {
    fn sign_request(&self, nonce: u64) -> SignatureResult {
        let signature = self.signature(nonce)?;

        Ok(vec![
            ("nonce".to_string(), nonce.to_string()),
            ("key".to_string(), self.api_key.expose_secret().clone()),
            ("signature".to_string(), signature),
        ])
    }
}
