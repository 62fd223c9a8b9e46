//! Buda REST API endpoint path segments.
//!
//! Paths are assembled from these segments plus caller-supplied identifiers
//! (market ids, currencies, order ids), which are percent-encoded on the way
//! into the URL.

/// Base URL for the Buda REST API v2.
pub const BUDA_BASE_URL: &str = "https://www.buda.com/api/v2";

/// Public endpoints (no authentication required).
pub mod public {
    /// `/markets` and `/markets/{id}`.
    pub const MARKETS: &str = "markets";
    /// `/markets/{id}/order_book`.
    pub const ORDER_BOOK: &str = "order_book";
    /// `/markets/{id}/trades`.
    pub const TRADES: &str = "trades";
}

/// Private endpoints (authentication required).
pub mod private {
    /// `/balances` and `/balances/{currency}`.
    pub const BALANCES: &str = "balances";
    /// `/markets/{id}/orders` and `/orders/{id}`.
    pub const ORDERS: &str = "orders";
    /// `/currencies/{currency}/...`.
    pub const CURRENCIES: &str = "currencies";
    /// `/currencies/{currency}/deposits`.
    pub const DEPOSITS: &str = "deposits";
    /// `/currencies/{currency}/withdrawals`.
    pub const WITHDRAWALS: &str = "withdrawals";
}

/// Authentication header names (`X-SBTC-APIKEY`, `X-SBTC-NONCE`,
/// `X-SBTC-SIGNATURE`), lowercased as HTTP/2 requires.
pub mod headers {
    /// Carries the API key.
    pub const API_KEY: &str = "x-sbtc-apikey";
    /// Carries the nonce that was signed.
    pub const NONCE: &str = "x-sbtc-nonce";
    /// Carries the hex-encoded HMAC-SHA384 signature.
    pub const SIGNATURE: &str = "x-sbtc-signature";
}
