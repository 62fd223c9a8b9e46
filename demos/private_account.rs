//! Example: Private account endpoints.
//!
//! Reads `BUDA_API_KEY` and `BUDA_API_SECRET` from the environment or a
//! `.env` file.
//!
//! Run with: cargo run --example private_account

use std::sync::Arc;
use std::time::Duration;

use buda_api_client::OrderState;
use buda_api_client::auth::{EnvCredentials, IncreasingNonce};
use buda_api_client::rest::BudaRestClient;
use buda_api_client::rest::private::OrdersRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env()? {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BUDA_API_KEY and BUDA_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = BudaRestClient::builder()
        .credentials(credentials)
        .nonce_provider(Arc::new(IncreasingNonce::new()))
        .user_agent("buda-api-client-examples/private_account")
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("=== Balances ===");
    for balance in client.get_balances().await? {
        if !balance.amount.is_zero() {
            println!(
                "{}: {} (available {}, frozen {})",
                balance.id, balance.amount, balance.available_amount, balance.frozen_amount
            );
        }
    }

    println!("\n=== CLP Balance ===");
    let clp = client.get_balance("clp").await?;
    println!("Available: {}", clp.available_amount);

    println!("\n=== Pending Orders (btc-clp) ===");
    let request = OrdersRequest::page(1, 20).state(OrderState::Pending);
    let orders = client.get_orders("btc-clp", &request).await?;
    println!(
        "Page {} of {} ({} orders total)",
        orders.meta.current_page, orders.meta.total_pages, orders.meta.total_count
    );
    for order in &orders.items {
        println!(
            "  #{} {} {} limit={:?} state={}",
            order.id, order.side, order.amount, order.limit, order.state
        );
    }

    println!("\n=== Deposits (clp) ===");
    let deposits = client.get_deposit_history("clp").await?;
    for deposit in deposits.items.iter().take(5) {
        println!("  #{} {} {}", deposit.id, deposit.amount, deposit.state);
    }

    println!("\n=== Withdrawals (btc) ===");
    let withdrawals = client.get_withdraw_history("btc").await?;
    for withdrawal in withdrawals.items.iter().take(5) {
        println!("  #{} {} {}", withdrawal.id, withdrawal.amount, withdrawal.state);
    }

    Ok(())
}
