//! Common domain types for Buda API.

use serde::{Deserialize, Serialize};

use crate::error::BudaError;

/// Side of an order: a bid buys the base currency, an ask sells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy order
    #[serde(rename = "Bid", alias = "bid")]
    Bid,
    /// Sell order
    #[serde(rename = "Ask", alias = "ask")]
    Ask,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Bid => write!(f, "Bid"),
            OrderSide::Ask => write!(f, "Ask"),
        }
    }
}

/// Whether an order executes at a limit price or at market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Execute at the given limit price or better
    Limit,
    /// Execute immediately at the best available price
    Market,
}

impl PriceType {
    /// The wire name of the price type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Limit => "limit",
            PriceType::Market => "market",
        }
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceType {
    type Err = BudaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit" => Ok(PriceType::Limit),
            "market" => Ok(PriceType::Market),
            other => Err(BudaError::InvalidOrderType(other.to_string())),
        }
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Accepted by the API, not yet in the book
    Received,
    /// Resting in the book
    Pending,
    /// Completely filled
    Traded,
    /// Cancellation requested
    Canceling,
    /// Cancelled
    Canceled,
    /// A state this client does not know about
    #[serde(other)]
    Unknown,
}

impl OrderState {
    /// The wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Received => "received",
            OrderState::Pending => "pending",
            OrderState::Traded => "traded",
            OrderState::Canceling => "canceling",
            OrderState::Canceled => "canceled",
            OrderState::Unknown => "unknown",
        }
    }

    /// Check whether the order can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderState::Traded | OrderState::Canceled)
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Taker direction of a public trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// The taker bought
    Buy,
    /// The taker sold
    Sell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_side_wire_names() {
        assert_eq!(serde_json::to_string(&OrderSide::Bid).unwrap(), r#""Bid""#);
        assert_eq!(serde_json::to_string(&OrderSide::Ask).unwrap(), r#""Ask""#);
        let side: OrderSide = serde_json::from_str(r#""ask""#).unwrap();
        assert_eq!(side, OrderSide::Ask);
    }

    #[test]
    fn test_price_type_from_str() {
        assert_eq!("limit".parse::<PriceType>().unwrap(), PriceType::Limit);
        assert_eq!("market".parse::<PriceType>().unwrap(), PriceType::Market);
        let err = "banana".parse::<PriceType>().unwrap_err();
        assert!(matches!(err, BudaError::InvalidOrderType(ref s) if s == "banana"));
    }

    #[test]
    fn test_order_state_unknown_fallback() {
        let state: OrderState = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(state, OrderState::Pending);
        let state: OrderState = serde_json::from_str(r#""unheard_of""#).unwrap();
        assert_eq!(state, OrderState::Unknown);
        assert!(OrderState::Canceled.is_final());
        assert!(!OrderState::Canceling.is_final());
    }
}
