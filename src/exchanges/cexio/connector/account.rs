use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{ApiResponse, Pair};
use crate::exchanges::cexio::rest::CexRestClient;
use crate::exchanges::cexio::types::{Balances, OpenOrder};
use async_trait::async_trait;
use tracing::instrument;

/// Account queries for CEX.IO
#[derive(Clone)]
pub struct Account<R: RestClient> {
    rest: CexRestClient<R>,
}

impl<R: RestClient> Account<R> {
    /// Create a new account manager
    pub fn new(rest: &R) -> Self
    where
        R: Clone,
    {
        Self {
            rest: CexRestClient::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    type Balances = Balances;
    type OpenOrder = OpenOrder;

    #[instrument(skip(self), fields(exchange = "cexio"))]
    async fn balance(&self) -> Result<ApiResponse<Balances>, ExchangeError> {
        self.rest.balance().await
    }

    #[instrument(skip(self), fields(exchange = "cexio"))]
    async fn open_orders(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<OpenOrder>>, ExchangeError> {
        let pair = Pair::or_default(pair)?;
        self.rest.open_orders(&pair).await
    }
}
