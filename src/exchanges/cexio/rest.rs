use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::{required, ApiResponse, OrderRequest, Pair};
use crate::exchanges::cexio::types::{Balances, OpenOrder, OrderBook, PlacedOrder, Ticker};

/// Path of a public endpoint: `/{method}/{PAIR}`
pub fn public_path(method: &str, pair: &Pair) -> String {
    format!("/{}/{}", method, pair)
}

/// Path of a private endpoint: `/{method}/` or `/{method}/{PAIR}`
pub fn private_path(method: &str, pair: Option<&Pair>) -> String {
    pair.map_or_else(
        || format!("/{}/", method),
        |pair| format!("/{}/{}", method, pair),
    )
}

/// Thin typed wrapper around `RestClient` for the CEX.IO API
#[derive(Clone)]
pub struct CexRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> CexRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &R {
        &self.client
    }

    pub async fn ticker(&self, pair: &Pair) -> Result<ApiResponse<Ticker>, ExchangeError> {
        self.client.get_json(&public_path("ticker", pair)).await
    }

    pub async fn order_book(&self, pair: &Pair) -> Result<ApiResponse<OrderBook>, ExchangeError> {
        self.client.get_json(&public_path("order_book", pair)).await
    }

    pub async fn balance(&self) -> Result<ApiResponse<Balances>, ExchangeError> {
        self.client
            .post_form_json(&private_path("balance", None), &[], true)
            .await
    }

    pub async fn open_orders(
        &self,
        pair: &Pair,
    ) -> Result<ApiResponse<Vec<OpenOrder>>, ExchangeError> {
        self.client
            .post_form_json(&private_path("open_orders", Some(pair)), &[], true)
            .await
    }

    /// Cancel an order; `order_id` must be non-empty
    pub async fn cancel_order(&self, order_id: &str) -> Result<ApiResponse<bool>, ExchangeError> {
        let order_id = required("id", Some(order_id))?;

        self.client
            .post_form_json(&private_path("cancel_order", None), &[("id", order_id)], true)
            .await
    }

    /// Place an order; pair, type, amount and price must all be present
    ///
    /// Unlike `open_orders`, the pair goes in the body as given.
    pub async fn place_order(
        &self,
        order: &OrderRequest,
    ) -> Result<ApiResponse<PlacedOrder>, ExchangeError> {
        let order = order.validate()?;
        let params = [
            ("pair", order.pair),
            ("type", order.order_type),
            ("amount", order.amount),
            ("price", order.price),
        ];

        self.client
            .post_form_json(&private_path("place_order", None), &params, true)
            .await
    }
}
