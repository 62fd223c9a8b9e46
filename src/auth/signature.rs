//! HMAC-SHA384 signature generation for Buda API authentication.
//!
//! Buda private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA384("{METHOD} {PATH_AND_QUERY} [{BASE64_BODY} ]{NONCE}", api_secret))
//! ```
//!
//! The signature is sent in the `X-SBTC-SIGNATURE` header, alongside the
//! key in `X-SBTC-APIKEY` and the nonce in `X-SBTC-NONCE`.

use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::BudaError;

type HmacSha384 = Hmac<Sha384>;

/// Build the exact string that is signed for a request.
///
/// `path_and_query` is the request-line path (no scheme or host), exactly
/// as sent on the wire. `body_base64` is the base64 encoding of the JSON
/// payload; an empty body is treated the same as no body.
pub fn canonical_message(
    method: &Method,
    path_and_query: &str,
    body_base64: Option<&str>,
    nonce: u64,
) -> String {
    match body_base64.filter(|body| !body.is_empty()) {
        Some(body) => format!("{} {} {} {}", method.as_str(), path_and_query, body, nonce),
        None => format!("{} {} {}", method.as_str(), path_and_query, nonce),
    }
}

/// Sign a request for Buda's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `method` - The HTTP method of the request
/// * `path_and_query` - The request-line path, e.g. `/api/v2/balances`
/// * `body_base64` - The base64-encoded JSON body, if the request has one
/// * `nonce` - The nonce value sent in the nonce header
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA384 signature.
///
/// # Example
///
/// ```rust
/// use buda_api_client::auth::{Credentials, sign_request};
/// use reqwest::Method;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(
///     &credentials,
///     &Method::GET,
///     "/api/v2/balances",
///     None,
///     1_500_000_000_000_000_000,
/// )?;
/// assert_eq!(signature.len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    method: &Method,
    path_and_query: &str,
    body_base64: Option<&str>,
    nonce: u64,
) -> Result<String, BudaError> {
    let secret = credentials.expose_secret();
    if secret.is_empty() {
        return Err(BudaError::Signing(
            "API secret is empty; refusing to sign".to_string(),
        ));
    }

    let message = canonical_message(method, path_and_query, body_base64, nonce);

    let mut hmac = HmacSha384::new_from_slice(secret.as_bytes())
        .map_err(|e| BudaError::Signing(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}
