//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Calling them on a client without credentials fails with
//! [`BudaError::AuthenticationRequired`] before any request is sent.

mod types;

pub use types::*;

use reqwest::Method;
use rust_decimal::Decimal;

use crate::error::BudaError;
use crate::rest::BudaRestClient;
use crate::rest::decode::{decode_field, decode_page};
use crate::rest::endpoints::{private, public};
use crate::rest::request::EndpointRequest;
use crate::types::{OrderSide, Page};

impl BudaRestClient {
    /// Get the balances of every currency in the account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use buda_api_client::rest::BudaRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BudaRestClient::with_credentials("key", "secret")?;
    ///
    ///     for balance in client.get_balances().await? {
    ///         println!("{}: {}", balance.id, balance.available_amount);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self) -> Result<Vec<Balance>, BudaError> {
        let response = self
            .execute(EndpointRequest::private(
                "get_balances",
                Method::GET,
                vec![private::BALANCES],
            ))
            .await?;
        decode_field(&response, "balances")
    }

    /// Get the balance of one currency.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency code, e.g. `"btc"`.
    pub async fn get_balance(&self, currency: &str) -> Result<Balance, BudaError> {
        let response = self
            .execute(EndpointRequest::private(
                "get_balance",
                Method::GET,
                vec![private::BALANCES, currency],
            ))
            .await?;
        decode_field(&response, "balance")
    }

    /// List the account's orders in a market, one page at a time.
    pub async fn get_orders(
        &self,
        market_id: &str,
        request: &OrdersRequest,
    ) -> Result<Page<Order>, BudaError> {
        let response = self
            .execute(
                EndpointRequest::private(
                    "get_orders",
                    Method::GET,
                    vec![public::MARKETS, market_id, private::ORDERS],
                )
                .with_query(request)?,
            )
            .await?;
        decode_page(&response, "orders")
    }

    /// Place an order, validating the textual price type first.
    ///
    /// `price_type` must be `"limit"` (with a `limit` price) or `"market"`
    /// (without one). Invalid combinations fail locally and nothing is sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use buda_api_client::rest::BudaRestClient;
    /// use buda_api_client::types::OrderSide;
    /// use rust_decimal::Decimal;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BudaRestClient::with_credentials("key", "secret")?;
    ///
    ///     let order = client
    ///         .post_order(
    ///             "btc-clp",
    ///             OrderSide::Bid,
    ///             "limit",
    ///             Decimal::new(1, 3),
    ///             Some(Decimal::new(25_000_000, 0)),
    ///         )
    ///         .await?;
    ///     println!("placed order {} ({})", order.id, order.state);
    ///     Ok(())
    /// }
    /// ```
    pub async fn post_order(
        &self,
        market_id: &str,
        side: OrderSide,
        price_type: &str,
        amount: Decimal,
        limit: Option<Decimal>,
    ) -> Result<Order, BudaError> {
        let order = NewOrder::from_parts(side, price_type, amount, limit)?;
        self.place_order(market_id, &order).await
    }

    /// Place an already-typed order.
    pub async fn place_order(&self, market_id: &str, order: &NewOrder) -> Result<Order, BudaError> {
        tracing::info!(
            market_id,
            side = %order.side(),
            price_type = %order.price_type(),
            "Placing Buda order"
        );
        let response = self
            .execute(
                EndpointRequest::private(
                    "post_order",
                    Method::POST,
                    vec![public::MARKETS, market_id, private::ORDERS],
                )
                .with_json(order)?,
            )
            .await?;
        decode_field(&response, "order")
    }

    /// Get one order by id.
    pub async fn get_order(&self, order_id: u64) -> Result<Order, BudaError> {
        let id = order_id.to_string();
        let response = self
            .execute(EndpointRequest::private(
                "get_order",
                Method::GET,
                vec![private::ORDERS, id.as_str()],
            ))
            .await?;
        decode_field(&response, "order")
    }

    /// Request cancellation of an order.
    ///
    /// The order's current state is not checked locally; the returned order
    /// reflects whatever state Buda moved it to.
    pub async fn cancel_order(&self, order_id: u64) -> Result<Order, BudaError> {
        let id = order_id.to_string();
        tracing::info!(order_id, "Canceling Buda order");
        let response = self
            .execute(
                EndpointRequest::private(
                    "cancel_order",
                    Method::PUT,
                    vec![private::ORDERS, id.as_str()],
                )
                .with_json(&OrderStateChange::CANCEL)?,
            )
            .await?;
        decode_field(&response, "order")
    }

    /// List deposits of a currency.
    pub async fn get_deposit_history(&self, currency: &str) -> Result<Page<Deposit>, BudaError> {
        let response = self
            .execute(EndpointRequest::private(
                "get_deposit_history",
                Method::GET,
                vec![private::CURRENCIES, currency, private::DEPOSITS],
            ))
            .await?;
        decode_page(&response, "deposits")
    }

    /// List withdrawals of a currency.
    pub async fn get_withdraw_history(
        &self,
        currency: &str,
    ) -> Result<Page<Withdrawal>, BudaError> {
        let response = self
            .execute(EndpointRequest::private(
                "get_withdraw_history",
                Method::GET,
                vec![private::CURRENCIES, currency, private::WITHDRAWALS],
            ))
            .await?;
        decode_page(&response, "withdrawals")
    }
}
