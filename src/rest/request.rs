//! Request construction: URL assembly, body serialization and signing.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::auth::{CredentialsProvider, NonceProvider, sign_request};
use crate::error::BudaError;
use crate::rest::endpoints::headers;

/// Whether an endpoint needs signature headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No authentication; signature headers are never attached.
    Public,
    /// Requires credentials; signed with a fresh nonce.
    Private,
}

/// Describes one logical API call before it is turned into HTTP.
#[derive(Debug, Clone)]
pub struct EndpointRequest<'a> {
    /// Facade operation name, used in errors and logs.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path segments relative to the base URL.
    pub segments: Vec<&'a str>,
    /// Already-encoded query string, without the leading `?`.
    pub query: Option<String>,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
    /// Authentication requirement.
    pub access: Access,
}

impl<'a> EndpointRequest<'a> {
    /// A public GET request.
    pub fn public_get(operation: &'static str, segments: Vec<&'a str>) -> Self {
        Self {
            operation,
            method: Method::GET,
            segments,
            query: None,
            body: None,
            access: Access::Public,
        }
    }

    /// An authenticated request without a body.
    pub fn private(operation: &'static str, method: Method, segments: Vec<&'a str>) -> Self {
        Self {
            operation,
            method,
            segments,
            query: None,
            body: None,
            access: Access::Private,
        }
    }

    /// Attach query parameters serialized with `serde_urlencoded`.
    ///
    /// An empty parameter set leaves the URL without a `?`.
    pub fn with_query<Q>(mut self, params: &Q) -> Result<Self, BudaError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| BudaError::InvalidRequest(format!("Invalid query parameters: {e}")))?;
        self.query = Some(query).filter(|q| !q.is_empty());
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn with_json<B>(mut self, body: &B) -> Result<Self, BudaError>
    where
        B: serde::Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// A fully specified HTTP request, ready for the transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Facade operation name.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: Url,
    /// Request headers, including signature headers for private calls.
    pub headers: HeaderMap,
    /// JSON body bytes.
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    /// The request-line path and query, exactly as signed and sent.
    pub fn path_and_query(&self) -> String {
        path_and_query(&self.url)
    }
}

fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Turns [`EndpointRequest`]s into [`PreparedRequest`]s for one client.
pub(crate) struct RequestBuilder<'c> {
    pub base_url: &'c Url,
    pub credentials: Option<&'c dyn CredentialsProvider>,
    pub nonce_provider: &'c dyn NonceProvider,
}

impl RequestBuilder<'_> {
    /// Build the request, signing it when the endpoint is private.
    ///
    /// Fails with [`BudaError::AuthenticationRequired`] for private endpoints
    /// on a client without credentials; no nonce is consumed in that case.
    pub fn build(&self, request: EndpointRequest<'_>) -> Result<PreparedRequest, BudaError> {
        let credentials = match request.access {
            Access::Public => None,
            Access::Private => Some(self.credentials.ok_or(
                BudaError::AuthenticationRequired {
                    operation: request.operation,
                },
            )?),
        };

        let url = self.url_for(&request.segments, request.query.as_deref())?;
        let mut header_map = HeaderMap::new();

        if request.body.is_some() {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(provider) = credentials {
            let creds = provider.get_credentials();
            let nonce = self.nonce_provider.next_nonce();
            let encoded_body = request.body.as_deref().map(|body| BASE64.encode(body));
            let signature = sign_request(
                creds,
                &request.method,
                &path_and_query(&url),
                encoded_body.as_deref(),
                nonce,
            )?;

            header_map.insert(
                HeaderName::from_static(headers::API_KEY),
                header_value(&creds.api_key)?,
            );
            header_map.insert(
                HeaderName::from_static(headers::NONCE),
                HeaderValue::from(nonce),
            );
            header_map.insert(
                HeaderName::from_static(headers::SIGNATURE),
                header_value(&signature)?,
            );
        }

        tracing::debug!(
            operation = request.operation,
            method = %request.method,
            path = url.path(),
            signed = credentials.is_some(),
            "Prepared Buda request"
        );

        Ok(PreparedRequest {
            operation: request.operation,
            method: request.method,
            url,
            headers: header_map,
            body: request.body,
        })
    }

    fn url_for(&self, segments: &[&str], query: Option<&str>) -> Result<Url, BudaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BudaError::InvalidRequest(format!(
                    "Base URL cannot hold a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);
        Ok(url)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, BudaError> {
    HeaderValue::from_str(value)
        .map_err(|_| BudaError::InvalidRequest(format!("Value is not a valid header: {value:?}")))
}
