//! Types for public REST API endpoints.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_with::formats::Flexible;
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::{Money, TradeDirection};

/// A tradable market.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Market {
    /// Market identifier, e.g. `"BTC-CLP"`.
    pub id: String,
    /// Lowercase market name, e.g. `"btc-clp"`.
    pub name: String,
    /// Currency being bought or sold.
    pub base_currency: String,
    /// Currency prices are quoted in.
    pub quote_currency: String,
    /// Smallest order the market accepts, in the base currency.
    pub minimum_order_amount: Money,
}

/// One price level of an order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "PriceLevelRepr")]
pub struct PriceLevel {
    /// Limit price, in the quote currency.
    pub price: Decimal,
    /// Amount resting at that price, in the base currency.
    pub amount: Decimal,
}

#[derive(Deserialize)]
struct PriceLevelRepr(
    #[serde(with = "rust_decimal::serde::str")] Decimal,
    #[serde(with = "rust_decimal::serde::str")] Decimal,
);

impl From<PriceLevelRepr> for PriceLevel {
    fn from(PriceLevelRepr(price, amount): PriceLevelRepr) -> Self {
        Self { price, amount }
    }
}

/// Current order book of a market.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderBook {
    /// Sell offers, best (lowest) first.
    pub asks: Vec<PriceLevel>,
    /// Buy offers, best (highest) first.
    pub bids: Vec<PriceLevel>,
}

impl OrderBook {
    /// Get the best ask.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// Get the best bid.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Get the difference between the best ask and best bid prices.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradesRequest {
    /// Return trades older than this unix timestamp, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Maximum number of entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TradesRequest {
    /// Page backwards from the given millisecond timestamp.
    pub fn before(timestamp_ms: i64) -> Self {
        Self {
            timestamp: Some(timestamp_ms),
            limit: None,
        }
    }

    /// Set the maximum number of entries.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Recent trades of a market.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trades {
    /// Market identifier.
    pub market_id: String,
    /// The timestamp the page was requested from, if any.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub timestamp: Option<OffsetDateTime>,
    /// Timestamp of the oldest entry; pass it back to page further.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub last_timestamp: Option<OffsetDateTime>,
    /// Trades, newest first.
    pub entries: Vec<TradeEntry>,
}

/// A single public trade.
///
/// Buda encodes trades as arrays:
/// `["<timestamp ms>", "<amount>", "<price>", "<direction>", <id>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeEntry {
    /// When the trade happened.
    pub timestamp: OffsetDateTime,
    /// Traded amount, in the base currency.
    pub amount: Decimal,
    /// Execution price, in the quote currency.
    pub price: Decimal,
    /// Taker direction.
    pub direction: TradeDirection,
    /// Trade id, when the API sends one.
    pub id: Option<u64>,
}

#[serde_as]
#[derive(Deserialize)]
struct Millis(#[serde_as(as = "TimestampMilliSeconds<String, Flexible>")] OffsetDateTime);

#[derive(Deserialize)]
struct DecimalStr(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl<'de> Deserialize<'de> for TradeEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TradeEntryVisitor;

        impl<'de> Visitor<'de> for TradeEntryVisitor {
            type Value = TradeEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a trade array [timestamp, amount, price, direction, id?]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let Millis(timestamp) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let DecimalStr(amount) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let DecimalStr(price) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let direction = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                let id = seq.next_element::<Option<u64>>()?.flatten();

                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(TradeEntry {
                    timestamp,
                    amount,
                    price,
                    direction,
                    id,
                })
            }
        }

        deserializer.deserialize_seq(TradeEntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_market_deserialize() {
        let json = r#"{
            "id": "BTC-CLP",
            "name": "btc-clp",
            "base_currency": "BTC",
            "quote_currency": "CLP",
            "minimum_order_amount": ["0.0001", "BTC"],
            "taker_fee": "0.8"
        }"#;
        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.id, "BTC-CLP");
        assert_eq!(market.minimum_order_amount.currency, "BTC");
    }

    #[test]
    fn test_order_book_spread() {
        let json = r#"{
            "asks": [["836677.14", "0.447349"], ["837000.0", "1.0"]],
            "bids": [["821580.0", "0.25667389"]]
        }"#;
        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.best_bid().unwrap().amount, Decimal::from_str("0.25667389").unwrap());
        assert_eq!(book.spread(), Some(Decimal::from_str("15097.14").unwrap()));
    }

    #[test]
    fn test_order_book_empty_side() {
        let book: OrderBook = serde_json::from_str(r#"{"asks": [], "bids": []}"#).unwrap();
        assert!(book.spread().is_none());
    }

    #[test]
    fn test_price_level_rejects_numbers() {
        assert!(serde_json::from_str::<PriceLevel>(r#"[836677.14, "0.4"]"#).is_err());
    }

    #[test]
    fn test_trades_deserialize() {
        let json = r#"{
            "market_id": "BTC-CLP",
            "timestamp": null,
            "last_timestamp": "1476905551698",
            "entries": [
                ["1476905551698", "3.2", "1200000.0", "buy", 48517],
                [1476905551000, "0.5", "1199000.0", "sell"]
            ]
        }"#;
        let trades: Trades = serde_json::from_str(json).unwrap();
        assert!(trades.timestamp.is_none());
        assert_eq!(
            trades.last_timestamp.unwrap().unix_timestamp_nanos(),
            1_476_905_551_698_000_000
        );
        assert_eq!(trades.entries.len(), 2);

        let first = &trades.entries[0];
        assert_eq!(first.amount, Decimal::from_str("3.2").unwrap());
        assert_eq!(first.direction, TradeDirection::Buy);
        assert_eq!(first.id, Some(48517));

        let second = &trades.entries[1];
        assert_eq!(second.direction, TradeDirection::Sell);
        assert!(second.id.is_none());
    }

    #[test]
    fn test_trade_entry_too_short() {
        assert!(serde_json::from_str::<TradeEntry>(r#"["1476905551698", "3.2"]"#).is_err());
    }

    #[test]
    fn test_trades_request_query() {
        let query = serde_urlencoded::to_string(TradesRequest::before(1_476_905_551_698).limit(50))
            .unwrap();
        assert_eq!(query, "timestamp=1476905551698&limit=50");
        assert_eq!(serde_urlencoded::to_string(TradesRequest::default()).unwrap(), "");
    }
}
