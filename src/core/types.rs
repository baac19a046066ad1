use crate::core::errors::ExchangeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Pair used when a call does not name one
pub const DEFAULT_PAIR: &str = "GHS/BTC";

/// Traded pair symbol such as `GHS/BTC`, always held upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Pair(String);

impl Pair {
    /// Create a pair, upper-casing the symbol
    pub fn new(symbol: &str) -> Result<Self, ExchangeError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ExchangeError::InvalidParameters(
                "pair must not be empty".to_string(),
            ));
        }
        Ok(Self(symbol.to_uppercase()))
    }

    /// Resolve an optional pair argument, falling back to [`DEFAULT_PAIR`]
    pub fn or_default(symbol: Option<&str>) -> Result<Self, ExchangeError> {
        symbol.map_or_else(|| Ok(Self::default()), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Pair {
    type Error = ExchangeError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Self::new(&symbol)
    }
}

impl Default for Pair {
    fn default() -> Self {
        Self(DEFAULT_PAIR.to_string())
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order placement parameters
///
/// Values are sent to the service exactly as given. Only presence is checked:
/// the sign of `amount`/`price` and the spelling of `order_type` are left to
/// the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRequest {
    pub pair: Option<String>,
    pub order_type: Option<String>,
    pub amount: Option<String>,
    pub price: Option<String>,
}

/// An [`OrderRequest`] with every field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder<'a> {
    pub pair: &'a str,
    pub order_type: &'a str,
    pub amount: &'a str,
    pub price: &'a str,
}

impl OrderRequest {
    pub fn new(
        pair: impl Into<String>,
        order_type: impl Into<String>,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            pair: Some(pair.into()),
            order_type: Some(order_type.into()),
            amount: Some(amount.into()),
            price: Some(price.into()),
        }
    }

    /// Check that pair, type, amount and price are all present
    pub fn validate(&self) -> Result<ValidatedOrder<'_>, ExchangeError> {
        let pair = required("pair", self.pair.as_deref())?;
        let order_type = required("type", self.order_type.as_deref())?;
        let amount = required("amount", self.amount.as_deref())?;
        let price = required("price", self.price.as_deref())?;

        Ok(ValidatedOrder {
            pair,
            order_type,
            amount,
            price,
        })
    }
}

/// Presence check shared by every operation parameter
pub fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, ExchangeError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ExchangeError::InvalidParameters(format!(
            "missing required parameter: {}",
            name
        ))),
    }
}

/// Decoded reply of a completed HTTP exchange
///
/// The service answers permission and logic problems with a 2xx status and a
/// body of the form `{"error": "..."}`. Those replies are surfaced as
/// [`ApiResponse::ServiceError`] and are never turned into an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Data(T),
    ServiceError(String),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a JSON body into the operation's payload or a service error
    pub fn from_value(value: Value) -> Result<Self, ExchangeError> {
        if let Some(error) = value.as_object().and_then(|obj| obj.get("error")) {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Ok(Self::ServiceError(message));
        }

        serde_json::from_value(value)
            .map(Self::Data)
            .map_err(|e| ExchangeError::DeserializationError(e.to_string()))
    }
}

impl<T> ApiResponse<T> {
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::ServiceError(_) => None,
        }
    }

    pub fn service_error(&self) -> Option<&str> {
        match self {
            Self::Data(_) => None,
            Self::ServiceError(message) => Some(message),
        }
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::ServiceError(_))
    }

    /// Convert into a `Result`, treating the service error as `Err`
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Data(data) => Ok(data),
            Self::ServiceError(message) => Err(message),
        }
    }
}

/// Lenient (de)serialization helpers for fields the service sends either as
/// JSON strings or as JSON numbers
pub mod lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Decimal that may be `null`, read as zero
    pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number, got {}",
                other
            ))),
        }
    }

    pub fn u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = string(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }

    pub fn option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom("timestamp out of range")),
            Some(Value::String(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected timestamp, got {}",
                other
            ))),
        }
    }
}
