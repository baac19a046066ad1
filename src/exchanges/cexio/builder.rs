use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{Clock, ReqwestRest, RestClientBuilder, RestClientConfig, Session};
use crate::exchanges::cexio::{connector::CexConnector, signer::CexSigner};
use std::sync::Arc;

pub const EXCHANGE_NAME: &str = "cexio";

fn rest_config(config: &ExchangeConfig) -> RestClientConfig {
    RestClientConfig::new(config.base_url.clone(), EXCHANGE_NAME.to_string())
        .with_timeout(config.timeout_seconds)
        .with_user_agent(config.user_agent.clone())
}

fn signer(config: &ExchangeConfig) -> Arc<CexSigner> {
    Arc::new(CexSigner::new(
        config.user.clone(),
        config.api_key().to_string(),
        config.api_secret().to_string(),
    ))
}

/// Create a CEX.IO connector signing with wall-clock nonces
pub fn build_connector(config: ExchangeConfig) -> Result<CexConnector<ReqwestRest>, ExchangeError> {
    let rest = RestClientBuilder::new(rest_config(&config))
        .with_signer(signer(&config))
        .build()?;

    Ok(CexConnector::new(rest))
}

/// Create a CEX.IO connector whose nonces come from `clock`
pub fn build_connector_with_clock<C: Clock + 'static>(
    config: ExchangeConfig,
    clock: C,
) -> Result<CexConnector<ReqwestRest<C>>, ExchangeError> {
    let session = Arc::new(Session::with_clock(signer(&config), clock));
    let rest = RestClientBuilder::new(rest_config(&config))
        .with_session(session)
        .build()?;

    Ok(CexConnector::new(rest))
}
