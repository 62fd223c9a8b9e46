//! Buda REST API client.
//!
//! Every operation follows the same pipeline: the request builder turns an
//! endpoint description into a signed HTTP request, the transport performs a
//! single round trip, and the decoder extracts the typed payload.
//!
//! # Trait-based API
//!
//! The [`BudaClient`] trait abstracts all REST API operations, enabling mock
//! implementations for testing and decorating wrappers.
//!
//! ```rust,ignore
//! use buda_api_client::rest::{BudaClient, BudaRestClient};
//!
//! async fn use_client<C: BudaClient>(client: &C) -> Result<(), buda_api_client::BudaError> {
//!     let markets = client.get_markets().await?;
//!     println!("{} markets", markets.len());
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod endpoints;
pub mod private;
pub mod public;
mod request;
mod traits;
mod transport;

pub use client::{BudaRestClient, BudaRestClientBuilder};
pub use endpoints::{BUDA_BASE_URL, headers};
pub use traits::BudaClient;
pub use transport::DEFAULT_TIMEOUT;
