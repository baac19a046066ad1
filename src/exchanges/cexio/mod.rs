pub mod builder;
pub mod connector;
pub mod rest;
pub mod signer;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_connector, build_connector_with_clock, EXCHANGE_NAME};
pub use connector::CexConnector;
pub use signer::CexSigner;
pub use types::{AssetBalance, Balances, OpenOrder, OrderBook, PlacedOrder, Ticker};
