//! Example: Placing and cancelling an order.
//!
//! The order is a tiny bid far below the market, so it rests in the book
//! until it is cancelled. Nothing is placed unless `BUDA_ALLOW_TRADING=1`.
//!
//! Run with: cargo run --example private_trading

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use buda_api_client::auth::EnvCredentials;
use buda_api_client::rest::BudaRestClient;
use buda_api_client::rest::private::NewOrder;
use buda_api_client::{BudaError, OrderSide};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let credentials = match EnvCredentials::try_from_env()? {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BUDA_API_KEY and BUDA_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = BudaRestClient::builder().credentials(credentials).build()?;

    // Price types are validated before anything is sent.
    match client
        .post_order("btc-clp", OrderSide::Bid, "stop", Decimal::ONE, None)
        .await
    {
        Err(BudaError::InvalidOrderType(kind)) => println!("Rejected locally: {kind:?}"),
        other => println!("Unexpected result: {other:?}"),
    }

    if env::var("BUDA_ALLOW_TRADING").ok().as_deref() != Some("1") {
        println!("Set BUDA_ALLOW_TRADING=1 to place and cancel a real order.");
        return Ok(());
    }

    let order = NewOrder::limit(
        OrderSide::Bid,
        Decimal::from_str("0.0001")?,
        Decimal::from_str("1000")?,
    );
    let placed = client.place_order("btc-clp", &order).await?;
    println!("Placed order #{} ({})", placed.id, placed.state);

    let fetched = client.get_order(placed.id).await?;
    println!("Fetched order #{}: {} left", fetched.id, fetched.amount);

    let cancelled = client.cancel_order(placed.id).await?;
    println!("Cancel requested, state is now {}", cancelled.state);

    if let Ok(id) = env::var("BUDA_CANCEL_ORDER_ID") {
        let cancelled = client.cancel_order(id.parse()?).await?;
        println!("Cancelled order #{} ({})", cancelled.id, cancelled.state);
    }

    Ok(())
}
