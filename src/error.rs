//! Error types for the Buda client library.

use thiserror::Error;

/// Maximum number of body characters kept in a [`DecodeError`].
const EXCERPT_LIMIT: usize = 256;

/// The main error type for all Buda client operations.
#[derive(Error, Debug)]
pub enum BudaError {
    /// An authenticated operation was invoked on a client without credentials.
    ///
    /// Raised before any network call is attempted.
    #[error("Authentication required for {operation}")]
    AuthenticationRequired {
        /// The facade operation that was refused
        operation: &'static str,
    },

    /// Unsupported order price type.
    #[error("Invalid order price type: {0:?} (expected \"limit\" or \"market\")")]
    InvalidOrderType(String),

    /// Only one of API key and API secret was supplied.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Signing was requested but could not be performed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Connection, TLS, timeout or body read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response body did not have the expected shape.
    #[error("{0}")]
    Decode(DecodeError),

    /// Request payload serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be assembled (e.g. a header value is not sendable).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for BudaError {
    fn from(err: reqwest::Error) -> Self {
        BudaError::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl BudaError {
    /// Get the remote error payload, if the failure carried one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BudaError::Decode(decode) => decode.api_error.as_ref(),
            _ => None,
        }
    }

    /// Check whether this error was raised before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            BudaError::AuthenticationRequired { .. }
                | BudaError::InvalidOrderType(_)
                | BudaError::InvalidCredentials(_)
                | BudaError::Signing(_)
                | BudaError::Json(_)
                | BudaError::Url(_)
                | BudaError::InvalidRequest(_)
        )
    }
}

/// A response body that could not be decoded into the expected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Name of the shape the caller expected (e.g. `"markets"`).
    pub expected: &'static str,
    /// HTTP status code of the response.
    pub status: u16,
    /// Why decoding failed.
    pub reason: String,
    /// The start of the response body.
    pub excerpt: String,
    /// The remote error payload, when the body contained one.
    pub api_error: Option<ApiError>,
}

impl DecodeError {
    /// Create a decode error, truncating the body to a bounded excerpt.
    pub fn new(
        expected: &'static str,
        status: u16,
        reason: impl Into<String>,
        body: &str,
        api_error: Option<ApiError>,
    ) -> Self {
        Self {
            expected,
            status,
            reason: reason.into(),
            excerpt: excerpt(body),
            api_error,
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to decode `{}` (HTTP {}): {}",
            self.expected, self.status, self.reason
        )?;
        if let Some(api_error) = &self.api_error {
            write!(f, "; API error: {api_error}")?;
        }
        write!(f, "; body: {}", self.excerpt)
    }
}

impl std::error::Error for DecodeError {}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// Error payload returned by the Buda API in a response body.
///
/// Buda answers failures with `{"message": "...", "code": "..."}`; some
/// endpoints answer with a bare `{"error": "..."}`. Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The machine-readable error code (e.g. `"not_found"`), if any.
    pub code: Option<String>,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) if code != &self.message => write!(f, "{}: {}", code, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Extract an API error from a parsed response body.
    ///
    /// Returns `None` when the body is not an object carrying an
    /// `error`, `code` or `message` key.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;
        let text = |key: &str| -> Option<String> {
            object.get(key).map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        };

        let code = text("code");
        let message = text("message");
        match (text("error"), code, message) {
            (Some(error), code, Some(message)) => Some(Self::new(code.or(Some(error)), message)),
            (Some(error), code, None) => {
                Some(Self::new(code.or_else(|| Some(error.clone())), error))
            }
            (None, code, Some(message)) => Some(Self::new(code, message)),
            (None, Some(code), None) => Some(Self::new(Some(code.clone()), code)),
            (None, None, None) => None,
        }
    }

    fn code_is(&self, expected: &str) -> bool {
        self.code.as_deref() == Some(expected)
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code_is(error_codes::NOT_FOUND)
    }

    /// Check if the server rejected the nonce as stale or replayed.
    pub fn is_invalid_nonce(&self) -> bool {
        self.code_is(error_codes::INVALID_NONCE)
    }

    /// Check if the key, nonce or signature headers were rejected.
    pub fn is_authentication_error(&self) -> bool {
        self.code_is(error_codes::AUTHENTICATION_ERROR) || self.is_invalid_nonce()
    }

    /// Check if the key lacks permission for the operation.
    pub fn is_forbidden(&self) -> bool {
        self.code_is(error_codes::FORBIDDEN)
    }

    /// Check if the request parameters were rejected (e.g. an order that
    /// cannot be cancelled in its current state).
    pub fn is_invalid_parameters(&self) -> bool {
        self.code_is(error_codes::INVALID_PARAMETERS)
    }
}

/// Known Buda error codes for pattern matching.
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const INVALID_NONCE: &str = "invalid_nonce";
    pub const AUTHENTICATION_ERROR: &str = "authentication_error";
    pub const FORBIDDEN: &str = "forbidden";
    pub const INVALID_PARAMETERS: &str = "invalid_parameters";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_error_key() {
        let body = serde_json::json!({ "error": "not_found" });
        let error = ApiError::from_body(&body).unwrap();
        assert_eq!(error.code.as_deref(), Some("not_found"));
        assert_eq!(error.message, "not_found");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "not_found");
    }

    #[test]
    fn test_api_error_from_message_and_code() {
        let body = serde_json::json!({
            "message": "Nonce is too small",
            "code": "invalid_nonce"
        });
        let error = ApiError::from_body(&body).unwrap();
        assert!(error.is_invalid_nonce());
        assert!(error.is_authentication_error());
        assert_eq!(error.to_string(), "invalid_nonce: Nonce is too small");
    }

    #[test]
    fn test_api_error_code_predicates() {
        let forbidden = ApiError::from_body(&serde_json::json!({
            "message": "Not authorized",
            "code": "forbidden"
        }))
        .unwrap();
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_authentication_error());

        let rejected = ApiError::new(Some("invalid_parameters".into()), "Order is already traded");
        assert!(rejected.is_invalid_parameters());
        assert!(!rejected.is_not_found());
    }

    #[test]
    fn test_api_error_absent() {
        let body = serde_json::json!({ "markets": [] });
        assert!(ApiError::from_body(&body).is_none());
        assert!(ApiError::from_body(&serde_json::json!([1, 2])).is_none());
    }

    #[test]
    fn test_decode_error_display_includes_payload() {
        let api_error = ApiError::new(Some("not_found".into()), "not_found");
        let error = DecodeError::new(
            "market",
            404,
            "missing key `market`",
            r#"{"error":"not_found"}"#,
            Some(api_error),
        );
        let text = error.to_string();
        assert!(text.contains("market"));
        assert!(text.contains("404"));
        assert!(text.contains("not_found"));
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let body = "x".repeat(EXCERPT_LIMIT * 2);
        let error = DecodeError::new("markets", 200, "bad", &body, None);
        assert_eq!(error.excerpt.len(), EXCERPT_LIMIT + 3);
        assert!(error.excerpt.ends_with("..."));
    }

    #[test]
    fn test_local_errors() {
        let error = BudaError::AuthenticationRequired {
            operation: "get_balances",
        };
        assert!(error.is_local());
        assert!(error.to_string().contains("get_balances"));
        assert!(BudaError::InvalidOrderType("banana".into()).is_local());
    }
}
