//! Async client for the CEX.IO trading API.
//!
//! Public market data is fetched with plain GETs; account and order calls are
//! form-encoded POSTs signed with an HMAC over `nonce ‖ user ‖ key`. Nonces
//! are whole Unix seconds, strictly increasing per client, and signed calls
//! on one client run one at a time. Two signed calls in the same second make
//! the second one wait a second, which also keeps the client within the
//! service's quota of about one request per second.
//!
//! Use a single client per API key. Independent clients sharing a key can
//! pick the same nonce and get requests rejected.
//!
//! ```rust,no_run
//! use cexio::{build_connector, AccountInfo, ExchangeConfig, MarketDataSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExchangeConfig::new("up123456", "api_key", "api_secret")?;
//! let cex = build_connector(config)?;
//!
//! let ticker = cex.ticker(None).await?;
//! match cex.balance().await? {
//!     cexio::ApiResponse::Data(balances) => println!("{:?}", balances.asset("BTC")),
//!     cexio::ApiResponse::ServiceError(message) => eprintln!("service said: {}", message),
//! }
//! # let _ = ticker;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::ExchangeError,
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer},
    types::*,
};
pub use exchanges::cexio::{build_connector, CexConnector};
