use cexio::{build_connector, AccountInfo, ApiResponse, ExchangeConfig, MarketDataSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Reads CEXIO_USER, CEXIO_API_KEY and CEXIO_API_SECRET (and .env if present)
    let config = ExchangeConfig::from_env_file("CEXIO")?;
    let pair = std::env::args().nth(1);
    let cex = build_connector(config)?;

    match cex.ticker(pair.as_deref()).await {
        Ok(ApiResponse::Data(ticker)) => println!(
            "Ticker: last={} bid={} ask={} volume={}",
            ticker.last, ticker.bid, ticker.ask, ticker.volume
        ),
        Ok(ApiResponse::ServiceError(message)) => println!("Ticker rejected: {}", message),
        Err(e) => println!("Ticker unavailable: {}", e),
    }

    match cex.order_book(pair.as_deref()).await {
        Ok(ApiResponse::Data(book)) => println!(
            "Order book: {} bids, {} asks, best bid {:?}, best ask {:?}",
            book.bids.len(),
            book.asks.len(),
            book.best_bid(),
            book.best_ask()
        ),
        Ok(ApiResponse::ServiceError(message)) => println!("Order book rejected: {}", message),
        Err(e) => println!("Order book unavailable: {}", e),
    }

    match cex.balance().await {
        Ok(ApiResponse::Data(balances)) => {
            for (symbol, balance) in &balances.assets {
                println!(
                    "{}: available={} in orders={}",
                    symbol, balance.available, balance.orders
                );
            }
        }
        Ok(ApiResponse::ServiceError(message)) => println!("Balance rejected: {}", message),
        Err(e) => println!("Balance unavailable: {}", e),
    }

    Ok(())
}
