use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{ApiResponse, OrderRequest};
use crate::exchanges::cexio::rest::CexRestClient;
use crate::exchanges::cexio::types::PlacedOrder;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

/// Order management for CEX.IO
#[derive(Clone)]
pub struct Trading<R: RestClient> {
    rest: CexRestClient<R>,
}

impl<R: RestClient> Trading<R> {
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
impl<R: RestClient> OrderPlacer for Trading<R> {
    type PlacedOrder = PlacedOrder;
    type Trade = Value;

    #[instrument(skip(self, order), fields(exchange = "cexio", pair = ?order.pair, order_type = ?order.order_type))]
    async fn place_order(
        &self,
        order: OrderRequest,
    ) -> Result<ApiResponse<PlacedOrder>, ExchangeError> {
        self.rest.place_order(&order).await
    }

    #[instrument(skip(self), fields(exchange = "cexio"))]
    async fn cancel_order(&self, order_id: &str) -> Result<ApiResponse<bool>, ExchangeError> {
        self.rest.cancel_order(order_id).await
    }

    async fn trade_history(
        &self,
        pair: Option<&str>,
    ) -> Result<ApiResponse<Vec<Value>>, ExchangeError> {
        warn!(exchange = "cexio", pair = ?pair, "trade_history is not implemented");
        Err(ExchangeError::NotImplemented("trade_history"))
    }
}
