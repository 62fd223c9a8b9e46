//! Trait definition for the Buda REST API client.
//!
//! [`BudaClient`] abstracts every REST operation so that code can be written
//! against mocks or decorated clients.
//!
//! # Example
//!
//! ```rust,ignore
//! use buda_api_client::rest::{BudaClient, BudaRestClient};
//!
//! async fn print_spread<C: BudaClient>(client: &C) -> Result<(), buda_api_client::BudaError> {
//!     let book = client.get_order_book("btc-clp").await?;
//!     println!("Spread: {:?}", book.spread());
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::BudaError;
use crate::rest::BudaRestClient;
use crate::rest::private::{Balance, Deposit, NewOrder, Order, OrdersRequest, Withdrawal};
use crate::rest::public::{Market, OrderBook, Trades, TradesRequest};
use crate::types::{OrderSide, Page};

/// Trait defining all Buda REST API operations.
///
/// All methods are async and return `Result<T, BudaError>`.
pub trait BudaClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// List all markets.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, BudaError>> + Send;

    /// Get a single market.
    fn get_ticker(
        &self,
        market_id: &str,
    ) -> impl Future<Output = Result<Market, BudaError>> + Send;

    /// Get the order book of a market.
    fn get_order_book(
        &self,
        market_id: &str,
    ) -> impl Future<Output = Result<OrderBook, BudaError>> + Send;

    /// Get recent trades of a market.
    fn get_trades(
        &self,
        market_id: &str,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<Trades, BudaError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get all balances.
    fn get_balances(&self) -> impl Future<Output = Result<Vec<Balance>, BudaError>> + Send;

    /// Get the balance of one currency.
    fn get_balance(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Balance, BudaError>> + Send;

    /// List deposits of a currency.
    fn get_deposit_history(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Page<Deposit>, BudaError>> + Send;

    /// List withdrawals of a currency.
    fn get_withdraw_history(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Page<Withdrawal>, BudaError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// List orders of a market.
    fn get_orders(
        &self,
        market_id: &str,
        request: &OrdersRequest,
    ) -> impl Future<Output = Result<Page<Order>, BudaError>> + Send;

    /// Place an order from a textual price type.
    fn post_order(
        &self,
        market_id: &str,
        side: OrderSide,
        price_type: &str,
        amount: Decimal,
        limit: Option<Decimal>,
    ) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Place a typed order.
    fn place_order(
        &self,
        market_id: &str,
        order: &NewOrder,
    ) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Get one order.
    fn get_order(&self, order_id: u64) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Request cancellation of an order.
    fn cancel_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Order, BudaError>> + Send;
}

impl BudaClient for BudaRestClient {
    async fn get_markets(&self) -> Result<Vec<Market>, BudaError> {
        BudaRestClient::get_markets(self).await
    }

    async fn get_ticker(&self, market_id: &str) -> Result<Market, BudaError> {
        BudaRestClient::get_ticker(self, market_id).await
    }

    async fn get_order_book(&self, market_id: &str) -> Result<OrderBook, BudaError> {
        BudaRestClient::get_order_book(self, market_id).await
    }

    async fn get_trades(
        &self,
        market_id: &str,
        request: &TradesRequest,
    ) -> Result<Trades, BudaError> {
        BudaRestClient::get_trades_with(self, market_id, request).await
    }

    async fn get_balances(&self) -> Result<Vec<Balance>, BudaError> {
        BudaRestClient::get_balances(self).await
    }

    async fn get_balance(&self, currency: &str) -> Result<Balance, BudaError> {
        BudaRestClient::get_balance(self, currency).await
    }

    async fn get_deposit_history(&self, currency: &str) -> Result<Page<Deposit>, BudaError> {
        BudaRestClient::get_deposit_history(self, currency).await
    }

    async fn get_withdraw_history(&self, currency: &str) -> Result<Page<Withdrawal>, BudaError> {
        BudaRestClient::get_withdraw_history(self, currency).await
    }

    async fn get_orders(
        &self,
        market_id: &str,
        request: &OrdersRequest,
    ) -> Result<Page<Order>, BudaError> {
        BudaRestClient::get_orders(self, market_id, request).await
    }

    async fn post_order(
        &self,
        market_id: &str,
        side: OrderSide,
        price_type: &str,
        amount: Decimal,
        limit: Option<Decimal>,
    ) -> Result<Order, BudaError> {
        BudaRestClient::post_order(self, market_id, side, price_type, amount, limit).await
    }

    async fn place_order(&self, market_id: &str, order: &NewOrder) -> Result<Order, BudaError> {
        BudaRestClient::place_order(self, market_id, order).await
    }

    async fn get_order(&self, order_id: u64) -> Result<Order, BudaError> {
        BudaRestClient::get_order(self, order_id).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Order, BudaError> {
        BudaRestClient::cancel_order(self, order_id).await
    }
}
