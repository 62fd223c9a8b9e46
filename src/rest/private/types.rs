//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::BudaError;
use crate::types::serde_helpers::empty_string_as_none;
use crate::types::{Money, OrderSide, OrderState, PriceType};

// ========== Balances ==========

/// Wallet balance in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    /// Currency code, e.g. `"BTC"`.
    pub id: String,
    /// Total amount held.
    pub amount: Money,
    /// Amount free to trade or withdraw.
    pub available_amount: Money,
    /// Amount reserved by open orders.
    pub frozen_amount: Money,
    /// Amount reserved by pending withdrawals.
    pub pending_withdraw_amount: Money,
    /// Owning account.
    #[serde(default)]
    pub account_id: Option<u64>,
}

// ========== Orders ==========

/// An order as reported by Buda.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Order id.
    pub id: u64,
    /// Market the order was placed in.
    pub market_id: String,
    /// Owning account.
    #[serde(default)]
    pub account_id: Option<u64>,
    /// Bid or ask.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Current lifecycle state.
    pub state: OrderState,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Currency fees are charged in.
    #[serde(default)]
    pub fee_currency: Option<String>,
    /// Limit or market.
    pub price_type: PriceType,
    /// Limit price; `None` for market orders.
    #[serde(default)]
    pub limit: Option<Money>,
    /// Amount still to be traded.
    pub amount: Money,
    /// Amount the order was placed with.
    pub original_amount: Money,
    /// Amount traded so far.
    pub traded_amount: Money,
    /// Quote currency exchanged so far.
    pub total_exchanged: Money,
    /// Fees paid so far.
    pub paid_fee: Money,
}

/// Request parameters for listing orders of a market.
///
/// Serialized as `per`, `page`, `state`, `minimumExchanged`, in that order;
/// unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrdersRequest {
    /// Orders per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<u32>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Only orders in this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    /// Only orders that exchanged at least this much.
    #[serde(rename = "minimumExchanged", skip_serializing_if = "Option::is_none")]
    pub minimum_exchanged: Option<Decimal>,
}

impl OrdersRequest {
    /// Create a request for one page of orders.
    pub fn page(page: u32, per: u32) -> Self {
        Self {
            per: Some(per),
            page: Some(page),
            ..Default::default()
        }
    }

    /// Filter by state.
    pub fn state(mut self, state: OrderState) -> Self {
        self.state = Some(state);
        self
    }

    /// Filter by minimum exchanged amount.
    pub fn minimum_exchanged(mut self, amount: Decimal) -> Self {
        self.minimum_exchanged = Some(amount);
        self
    }
}

/// Payload for placing a new order.
///
/// Limit and market orders have different wire shapes: only a limit order
/// carries a `limit` field.
///
/// ```rust
/// use buda_api_client::rest::private::NewOrder;
/// use buda_api_client::types::OrderSide;
///
/// let order = NewOrder::market(OrderSide::Ask, "0.5".parse().unwrap());
/// assert_eq!(
///     serde_json::to_string(&order).unwrap(),
///     r#"{"price_type":"market","type":"Ask","amount":"0.5"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "price_type", rename_all = "lowercase")]
pub enum NewOrder {
    /// Rest in the book at `limit` or better.
    Limit {
        /// Bid or ask.
        #[serde(rename = "type")]
        side: OrderSide,
        /// Limit price, in the quote currency.
        #[serde(with = "rust_decimal::serde::str")]
        limit: Decimal,
        /// Amount, in the base currency.
        #[serde(with = "rust_decimal::serde::str")]
        amount: Decimal,
    },
    /// Execute immediately at the best available price.
    Market {
        /// Bid or ask.
        #[serde(rename = "type")]
        side: OrderSide,
        /// Amount, in the base currency.
        #[serde(with = "rust_decimal::serde::str")]
        amount: Decimal,
    },
}

impl NewOrder {
    /// A limit order.
    pub fn limit(side: OrderSide, amount: Decimal, limit: Decimal) -> Self {
        NewOrder::Limit {
            side,
            limit,
            amount,
        }
    }

    /// A market order.
    pub fn market(side: OrderSide, amount: Decimal) -> Self {
        NewOrder::Market { side, amount }
    }

    /// Build an order from a textual price type.
    ///
    /// Fails with [`BudaError::InvalidOrderType`] unless `price_type` is
    /// `"limit"` or `"market"`. A limit order requires a limit price and a
    /// market order must not have one.
    pub fn from_parts(
        side: OrderSide,
        price_type: &str,
        amount: Decimal,
        limit: Option<Decimal>,
    ) -> Result<Self, BudaError> {
        match (price_type.parse::<PriceType>()?, limit) {
            (PriceType::Limit, Some(limit)) => Ok(Self::limit(side, amount, limit)),
            (PriceType::Limit, None) => Err(BudaError::InvalidRequest(
                "limit orders require a limit price".to_string(),
            )),
            (PriceType::Market, None) => Ok(Self::market(side, amount)),
            (PriceType::Market, Some(_)) => Err(BudaError::InvalidRequest(
                "market orders do not take a limit price".to_string(),
            )),
        }
    }

    /// The price type of this order.
    pub fn price_type(&self) -> PriceType {
        match self {
            NewOrder::Limit { .. } => PriceType::Limit,
            NewOrder::Market { .. } => PriceType::Market,
        }
    }

    /// Bid or ask.
    pub fn side(&self) -> OrderSide {
        match self {
            NewOrder::Limit { side, .. } | NewOrder::Market { side, .. } => *side,
        }
    }
}

/// Body of a state transition request on an existing order.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct OrderStateChange {
    pub state: OrderState,
}

impl OrderStateChange {
    pub const CANCEL: Self = Self {
        state: OrderState::Canceling,
    };
}

// ========== Deposits and withdrawals ==========

/// A fiat or crypto deposit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deposit {
    /// Deposit id.
    pub id: u64,
    /// Processing state, e.g. `"confirmed"` or `"anulled"`.
    pub state: String,
    /// Currency code.
    pub currency: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Method-specific metadata.
    #[serde(default)]
    pub deposit_data: Option<DepositData>,
    /// Deposited amount.
    pub amount: Money,
    /// Fee charged, if any.
    #[serde(default)]
    pub fee: Option<Money>,
}

/// Method-specific deposit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepositData {
    /// Metadata kind, e.g. `"deposit_data"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Where a bank transfer receipt can be uploaded.
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Crypto deposit address.
    #[serde(default)]
    pub address: Option<String>,
    /// Crypto transaction hash.
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// A fiat or crypto withdrawal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Withdrawal {
    /// Withdrawal id.
    pub id: u64,
    /// Processing state, e.g. `"confirmed"` or `"pending_execution"`.
    pub state: String,
    /// Currency code.
    pub currency: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Method-specific metadata.
    #[serde(default)]
    pub withdrawal_data: Option<WithdrawalData>,
    /// Withdrawn amount.
    pub amount: Money,
    /// Fee charged, if any.
    #[serde(default)]
    pub fee: Option<Money>,
}

/// Method-specific withdrawal metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithdrawalData {
    /// Metadata kind, e.g. `"withdrawal_data"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// When the bank or network executed the transfer.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub transacted_at: Option<OffsetDateTime>,
    /// Bank statement reference.
    #[serde(default)]
    pub statement_ref: Option<String>,
    /// Destination bank account, for fiat withdrawals.
    #[serde(default)]
    pub fiat_account: Option<FiatAccount>,
    /// Source account; shape varies by withdrawal method.
    #[serde(default)]
    pub source_account: Option<serde_json::Value>,
    /// Destination address, for crypto withdrawals.
    #[serde(default)]
    pub target_address: Option<String>,
    /// Transaction hash, for crypto withdrawals.
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// A registered bank account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FiatAccount {
    pub id: u64,
    pub account_number: String,
    pub account_type: String,
    #[serde(default)]
    pub bank_id: Option<u64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub currency: String,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub document_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub email: Option<String>,
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub national_number_identifier: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub phone: Option<String>,
    /// Peruvian interbank account code.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub pe_cci_number: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}
