use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::{ApiResponse, Pair};
use crate::exchanges::cexio::rest::CexRestClient;
use crate::exchanges::cexio::types::{OrderBook, Ticker};
use async_trait::async_trait;
use tracing::instrument;

/// Public market data for CEX.IO
#[derive(Clone)]
pub struct MarketData<R: RestClient> {
    rest: CexRestClient<R>,
}

impl<R: RestClient> MarketData<R> {
    pub fn new(rest: &R) -> Self
    where
        R: Clone,
    {
        Self {
            rest: CexRestClient::new(rest.clone()),
        }
    }

    pub(crate) fn rest(&self) -> &R {
        self.rest.inner()
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    type Ticker = Ticker;
    type OrderBook = OrderBook;

    #[instrument(skip(self), fields(exchange = "cexio"))]
    async fn ticker(&self, pair: Option<&str>) -> Result<ApiResponse<Ticker>, ExchangeError> {
        let pair = Pair::or_default(pair)?;
        self.rest.ticker(&pair).await
    }

    #[instrument(skip(self), fields(exchange = "cexio"))]
    async fn order_book(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<OrderBook>, ExchangeError> {
        let pair = Pair::or_default(pair)?;
        self.rest.order_book(&pair).await
    }
}
