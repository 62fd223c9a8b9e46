//! Example: Fetching public market data from Buda.
//!
//! No credentials are needed for these endpoints.
//!
//! Run with: cargo run --example public_data

use buda_api_client::rest::BudaRestClient;
use buda_api_client::rest::public::TradesRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = BudaRestClient::new()?;

    println!("=== Markets ===");
    let markets = client.get_markets().await?;
    for market in markets.iter().take(5) {
        println!(
            "{}: {}/{} (minimum order {})",
            market.id, market.base_currency, market.quote_currency, market.minimum_order_amount
        );
    }

    println!("\n=== Ticker (btc-clp) ===");
    let market = client.get_ticker("btc-clp").await?;
    println!("ID: {}", market.id);
    println!("Name: {}", market.name);
    println!("Base: {}", market.base_currency);
    println!("Quote: {}", market.quote_currency);
    println!("Minimum order: {}", market.minimum_order_amount);

    println!("\n=== Order Book (btc-clp) ===");
    let book = client.get_order_book("btc-clp").await?;
    println!("Asks (lowest first):");
    for ask in book.asks.iter().take(3) {
        println!("  {} @ {}", ask.amount, ask.price);
    }
    println!("Bids (highest first):");
    for bid in book.bids.iter().take(3) {
        println!("  {} @ {}", bid.amount, bid.price);
    }
    if let Some(spread) = book.spread() {
        println!("Spread: {spread}");
    }

    println!("\n=== Recent Trades (btc-clp) ===");
    let trades = client.get_trades("btc-clp").await?;
    for trade in trades.entries.iter().take(5) {
        println!(
            "  {:?} {} @ {} ({})",
            trade.direction, trade.amount, trade.price, trade.timestamp
        );
    }

    // Page backwards from the oldest trade of the first page.
    if let Some(last) = trades.last_timestamp {
        let millis = (last.unix_timestamp_nanos() / 1_000_000) as i64;
        let older = client
            .get_trades_with("btc-clp", &TradesRequest::before(millis).limit(5))
            .await?;
        println!("Older page: {} entries", older.entries.len());
    }

    println!("\nDone!");
    Ok(())
}
