//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BudaError;
use crate::rest::BudaRestClient;
use crate::rest::decode::decode_field;
use crate::rest::endpoints::public;
use crate::rest::request::EndpointRequest;

impl BudaRestClient {
    /// List all markets.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use buda_api_client::rest::BudaRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BudaRestClient::new()?;
    ///     for market in client.get_markets().await? {
    ///         println!("{} (min {})", market.id, market.minimum_order_amount);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_markets(&self) -> Result<Vec<Market>, BudaError> {
        let response = self
            .execute(EndpointRequest::public_get("get_markets", vec![public::MARKETS]))
            .await?;
        decode_field(&response, "markets")
    }

    /// Get a single market.
    ///
    /// # Arguments
    ///
    /// * `market_id` - Market identifier, e.g. `"btc-clp"`.
    pub async fn get_ticker(&self, market_id: &str) -> Result<Market, BudaError> {
        let response = self
            .execute(EndpointRequest::public_get(
                "get_ticker",
                vec![public::MARKETS, market_id],
            ))
            .await?;
        decode_field(&response, "market")
    }

    /// Get the current order book of a market.
    pub async fn get_order_book(&self, market_id: &str) -> Result<OrderBook, BudaError> {
        let response = self
            .execute(EndpointRequest::public_get(
                "get_order_book",
                vec![public::MARKETS, market_id, public::ORDER_BOOK],
            ))
            .await?;
        decode_field(&response, "order_book")
    }

    /// Get the most recent trades of a market.
    pub async fn get_trades(&self, market_id: &str) -> Result<Trades, BudaError> {
        self.get_trades_with(market_id, &TradesRequest::default())
            .await
    }

    /// Get trades of a market, paging backwards from a timestamp.
    ///
    /// # Arguments
    ///
    /// * `market_id` - Market identifier.
    /// * `request` - Paging parameters; pass [`Trades::last_timestamp`] of
    ///   the previous page to continue.
    pub async fn get_trades_with(
        &self,
        market_id: &str,
        request: &TradesRequest,
    ) -> Result<Trades, BudaError> {
        let response = self
            .execute(
                EndpointRequest::public_get(
                    "get_trades",
                    vec![public::MARKETS, market_id, public::TRADES],
                )
                .with_query(request)?,
            )
            .await?;
        decode_field(&response, "trades")
    }
}
