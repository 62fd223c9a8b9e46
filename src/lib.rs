//! # Buda Client
//!
//! An async Rust client library for the Buda.com (formerly SurBTC) exchange
//! REST API v2.
//!
//! ## Features
//!
//! - Public market data: markets, order books and trades
//! - Private account endpoints: balances, orders, deposits and withdrawals
//! - HMAC-SHA384 request signing with strictly increasing nonces
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use buda_api_client::rest::BudaRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BudaRestClient::new()?;
//!     let book = client.get_order_book("btc-clp").await?;
//!     println!("Best bid: {:?}", book.best_bid());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BudaError;
pub use types::common::{OrderSide, OrderState, PriceType};

/// Result type alias using BudaError
pub type Result<T> = std::result::Result<T, BudaError>;
