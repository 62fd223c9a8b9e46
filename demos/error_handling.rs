//! Example: Working with BudaError and ApiError.
//!
//! Run with: cargo run --example error_handling

use buda_api_client::BudaError;
use buda_api_client::error::{ApiError, DecodeError, error_codes};
use buda_api_client::rest::BudaRestClient;

fn describe(err: &BudaError) {
    match err {
        BudaError::AuthenticationRequired { operation } => {
            println!("{operation} needs credentials; nothing was sent");
        }
        BudaError::InvalidOrderType(kind) => println!("Unsupported price type {kind:?}"),
        BudaError::Transport(inner) => println!("Network failure: {inner}"),
        BudaError::Decode(decode) => match &decode.api_error {
            Some(api) if api.is_not_found() => println!("Not found (HTTP {})", decode.status),
            Some(api) if api.is_authentication_error() => println!("Rejected credentials: {api}"),
            Some(api) => println!("API error: {api}"),
            None => println!("Unexpected body for `{}`: {}", decode.expected, decode.reason),
        },
        other => println!("Other error: {other}"),
    }
    println!("  raised locally: {}", err.is_local());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_error = ApiError::new(Some(error_codes::INVALID_NONCE.to_string()), "Nonce too low");
    println!("API error: {api_error}");
    println!("Is invalid nonce: {}", api_error.is_invalid_nonce());

    let err = BudaError::Decode(DecodeError::new(
        "balances",
        401,
        "HTTP status 401 Unauthorized",
        r#"{"message":"Nonce too low","code":"invalid_nonce"}"#,
        Some(api_error),
    ));
    describe(&err);

    // A public-only client refuses private calls before touching the network.
    let client = BudaRestClient::new()?;
    if let Err(err) = client.get_balances().await {
        describe(&err);
    }

    // Unknown markets come back as a decode failure carrying `not_found`.
    if let Err(err) = client.get_ticker("no-such-market").await {
        describe(&err);
    }

    Ok(())
}
