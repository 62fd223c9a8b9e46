//! Buda REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::auth::{
    Credentials, CredentialsProvider, IncreasingNonce, NonceProvider, StaticCredentials,
};
use crate::error::BudaError;
use crate::rest::endpoints::BUDA_BASE_URL;
use crate::rest::request::{EndpointRequest, RequestBuilder};
use crate::rest::transport::{DEFAULT_TIMEOUT, RawResponse, Transport};

/// The Buda REST API client.
///
/// This client provides access to the public market data endpoints and, when
/// configured with credentials, to the private account endpoints. It is cheap
/// to clone; clones share the connection pool and the nonce source.
///
/// # Example
///
/// ```rust,no_run
/// use buda_api_client::rest::BudaRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BudaRestClient::new()?;
///
///     let market = client.get_ticker("btc-clp").await?;
///     println!("{}: minimum order {}", market.id, market.minimum_order_amount);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use buda_api_client::rest::BudaRestClient;
/// use buda_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BudaRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let balance = client.get_balance("clp").await?;
///     println!("Balance: {}", balance.available_amount);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BudaRestClient {
    transport: Transport,
    base_url: Url,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BudaRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BudaRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Result<Self, BudaError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BudaRestClientBuilder {
        BudaRestClientBuilder::new()
    }

    /// Create a client with an API key and secret.
    ///
    /// Two empty strings give a public-only client; exactly one empty string
    /// is rejected with [`BudaError::InvalidCredentials`].
    pub fn with_credentials(api_key: &str, api_secret: &str) -> Result<Self, BudaError> {
        Self::builder().api_keys(api_key, api_secret)?.build()
    }

    /// Whether private endpoints can be called.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build, sign and send one request.
    pub(crate) async fn execute(
        &self,
        request: EndpointRequest<'_>,
    ) -> Result<RawResponse, BudaError> {
        let prepared = RequestBuilder {
            base_url: &self.base_url,
            credentials: self.credentials.as_deref(),
            nonce_provider: self.nonce_provider.as_ref(),
        }
        .build(request)?;

        self.transport.send(prepared).await
    }
}

impl std::fmt::Debug for BudaRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudaRestClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BudaRestClient`].
pub struct BudaRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl BudaRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BUDA_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set credentials from a key and secret.
    ///
    /// Both empty clears the credentials; only one empty is an error.
    pub fn api_keys(mut self, api_key: &str, api_secret: &str) -> Result<Self, BudaError> {
        self.credentials = Credentials::from_parts(api_key, api_secret)?.map(|credentials| {
            Arc::new(StaticCredentials::from(credentials)) as Arc<dyn CredentialsProvider>
        });
        Ok(self)
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL does not parse, the user agent is not a valid
    /// header value, or the HTTP client cannot be initialized.
    pub fn build(self) -> Result<BudaRestClient, BudaError> {
        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BudaError::InvalidRequest(format!(
                "Base URL cannot hold a path: {base_url}"
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("buda-api-client/{}", env!("CARGO_PKG_VERSION")));
        let transport = Transport::new(&user_agent, self.timeout)?;

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        tracing::debug!(
            base_url = %base_url,
            has_credentials = self.credentials.is_some(),
            "Built Buda REST client"
        );

        Ok(BudaRestClient {
            transport,
            base_url,
            credentials: self.credentials,
            nonce_provider,
        })
    }
}

impl Default for BudaRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
