use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, MarketDataSource, OrderPlacer};
use crate::core::types::{ApiResponse, OrderRequest};
use crate::exchanges::cexio::types::{Balances, OpenOrder, OrderBook, PlacedOrder, Ticker};
use async_trait::async_trait;
use serde_json::Value;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// CEX.IO connector that composes all sub-trait implementations
///
/// Clones share the underlying HTTP client and signing session, so signed
/// calls made through any clone are serialized against each other.
#[derive(Clone)]
pub struct CexConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub account: Account<R>,
    pub trading: Trading<R>,
}

impl<R: RestClient + Clone> CexConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            market: MarketData::new(&rest),
            account: Account::new(&rest),
            trading: Trading::new(&rest),
        }
    }
}

impl<R: RestClient> CexConnector<R> {
    /// The transport shared by every sub-component
    pub fn rest(&self) -> &R {
        self.market.rest()
    }
}

// Implement traits for the connector by delegating to sub-components
#[async_trait]
impl<R: RestClient> MarketDataSource for CexConnector<R> {
    type Ticker = Ticker;
    type OrderBook = OrderBook;

    async fn ticker(&self, pair: Option<&str>) -> Result<ApiResponse<Ticker>, ExchangeError> {
        self.market.ticker(pair).await
    }

    async fn order_book(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<OrderBook>, ExchangeError> {
        self.market.order_book(pair).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for CexConnector<R> {
    type Balances = Balances;
    type OpenOrder = OpenOrder;

    async fn balance(&self) -> Result<ApiResponse<Balances>, ExchangeError> {
        self.account.balance().await
    }

    async fn open_orders(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<OpenOrder>>, ExchangeError> {
        self.account.open_orders(pair).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for CexConnector<R> {
    type PlacedOrder = PlacedOrder;
    type Trade = Value;

    async fn place_order(
        &self,
        order: OrderRequest,
    ) -> Result<ApiResponse<PlacedOrder>, ExchangeError> {
        self.trading.place_order(order).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<ApiResponse<bool>, ExchangeError> {
        self.trading.cancel_order(order_id).await
    }

    async fn trade_history(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<Value>>, ExchangeError> {
        self.trading.trade_history(pair).await
    }
}
