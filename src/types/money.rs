//! Monetary amounts as sent by Buda: `["<decimal string>", "<currency>"]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of a given currency.
///
/// Decoded from Buda's two-element array form, e.g. `["0.0001", "BTC"]`.
/// The amount must be a JSON string; bare JSON numbers are rejected so
/// that no amount ever passes through binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    /// The decimal amount, with the scale Buda sent.
    pub amount: Decimal,
    /// Currency code, e.g. `"BTC"` or `"CLP"`.
    pub currency: String,
}

impl Money {
    /// Create a new amount.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Check whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Serialize, Deserialize)]
struct MoneyRepr(#[serde(with = "rust_decimal::serde::str")] Decimal, String);

impl From<MoneyRepr> for Money {
    fn from(MoneyRepr(amount, currency): MoneyRepr) -> Self {
        Self { amount, currency }
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        MoneyRepr(money.amount, money.currency)
    }
}
