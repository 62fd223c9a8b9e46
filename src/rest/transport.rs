//! HTTP round trips.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::BudaError;
use crate::rest::request::PreparedRequest;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and body of a completed HTTP exchange.
///
/// Non-2xx statuses are not errors at this layer: Buda puts error details
/// in the JSON body, so the body is always handed on to the decoder.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

/// Executes prepared requests over a shared connection pool.
///
/// One request, one attempt: there is no retry middleware, since replaying a
/// signed request would reuse its nonce.
#[derive(Clone)]
pub(crate) struct Transport {
    client: ClientWithMiddleware,
}

impl Transport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, BudaError> {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent).map_err(|_| {
            BudaError::InvalidRequest(format!("User agent is not a valid header: {user_agent:?}"))
        })?;
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self { client })
    }

    /// Perform one HTTP round trip.
    pub async fn send(&self, request: PreparedRequest) -> Result<RawResponse, BudaError> {
        let path = request.path_and_query();
        let PreparedRequest {
            operation,
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.inspect_err(|e| {
            tracing::debug!(
                operation,
                path = %path,
                error = %e,
                "Buda request failed in transport"
            );
        })?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            operation,
            path = %path,
            status = status.as_u16(),
            "Buda response received"
        );
        Ok(RawResponse { status, body })
    }
}
