use crate::core::types::lenient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ticker {
    #[serde(deserialize_with = "lenient::u64")]
    pub timestamp: u64,
    pub low: Decimal,
    pub high: Decimal,
    pub last: Decimal,
    pub volume: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrderBook {
    #[serde(deserialize_with = "lenient::u64")]
    pub timestamp: u64,
    /// `[price, amount]` levels, best first
    pub bids: Vec<[Decimal; 2]>,
    pub asks: Vec<[Decimal; 2]>,
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_u64")]
    pub id: Option<u64>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<[Decimal; 2]> {
        self.bids.first().copied()
    }

    pub fn best_ask(&self) -> Option<[Decimal; 2]> {
        self.asks.first().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetBalance {
    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub available: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub orders: Decimal,
}

/// Account balances keyed by currency symbol
///
/// The service returns `timestamp`, `username` and one object per currency
/// side by side in a single JSON object; entries that are not balance objects
/// are left out of `assets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct Balances {
    pub timestamp: Option<u64>,
    pub username: Option<String>,
    pub assets: BTreeMap<String, AssetBalance>,
}

impl Balances {
    pub fn asset(&self, symbol: &str) -> Option<&AssetBalance> {
        self.assets.get(&symbol.to_uppercase())
    }
}

impl From<BTreeMap<String, Value>> for Balances {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut balances = Self::default();
        for (name, value) in raw {
            match name.as_str() {
                "timestamp" => {
                    balances.timestamp = match &value {
                        Value::Number(n) => n.as_u64(),
                        Value::String(s) => s.parse().ok(),
                        _ => None,
                    };
                }
                "username" => balances.username = value.as_str().map(str::to_string),
                _ if value.is_object() => match serde_json::from_value::<AssetBalance>(value) {
                    Ok(asset) => {
                        balances.assets.insert(name, asset);
                    }
                    Err(e) => warn!(symbol = %name, error = %e, "skipping undecodable balance"),
                },
                _ => {}
            }
        }
        balances
    }
}

/// Order still resting on the book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpenOrder {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub time: u64,
    #[serde(rename = "type")]
    pub order_type: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub pending: Decimal,
}

/// Reply to a successful order placement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlacedOrder {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub time: u64,
    #[serde(rename = "type")]
    pub order_type: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub pending: Decimal,
    #[serde(default)]
    pub complete: Option<bool>,
}
