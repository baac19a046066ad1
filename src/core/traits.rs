use crate::core::{
    errors::ExchangeError,
    types::{ApiResponse, OrderRequest},
};
use async_trait::async_trait;

/// Public, unauthenticated market data
///
/// `pair` defaults to [`DEFAULT_PAIR`](crate::core::types::DEFAULT_PAIR) when
/// `None` and is upper-cased before it reaches the wire.
#[async_trait]
pub trait MarketDataSource {
    type Ticker;
    type OrderBook;

    /// Get the ticker for a pair
    async fn ticker(&self, pair: Option<&str>)
        -> Result<ApiResponse<Self::Ticker>, ExchangeError>;

    /// Get the order book for a pair
    async fn order_book(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Self::OrderBook>, ExchangeError>;
}

/// Signed account queries
#[async_trait]
pub trait AccountInfo {
    type Balances;
    type OpenOrder;

    async fn balance(&self) -> Result<ApiResponse<Self::Balances>, ExchangeError>;

    async fn open_orders(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<Self::OpenOrder>>, ExchangeError>;
}

/// Signed order management
#[async_trait]
pub trait OrderPlacer {
    type PlacedOrder;
    type Trade;

    /// Place a new order; every field of `order` must be present
    async fn place_order(
        &self,
        order: OrderRequest,
    ) -> Result<ApiResponse<Self::PlacedOrder>, ExchangeError>;

    /// Cancel an order by id; an empty id fails before any request is made
    async fn cancel_order(&self, order_id: &str) -> Result<ApiResponse<bool>, ExchangeError>;

    /// Always fails with [`ExchangeError::NotImplemented`]
    async fn trade_history(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<Self::Trade>>, ExchangeError>;
}

// Composite trait for callers that need the whole surface
pub trait ExchangeConnector: MarketDataSource + AccountInfo + OrderPlacer {}

impl<T> ExchangeConnector for T where T: MarketDataSource + AccountInfo + OrderPlacer {}
