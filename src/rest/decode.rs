//! Response decoding: raw JSON bodies into typed records.
//!
//! Every Buda response wraps its payload under a named key (`{"market": ...}`,
//! `{"orders": [...], "meta": {...}}`). Failures arrive as an error object in
//! place of that key, usually with a non-2xx status. Both cases, and bodies
//! that are not JSON at all, become [`BudaError::Decode`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, BudaError, DecodeError};
use crate::rest::transport::RawResponse;
use crate::types::{Page, PageMeta};

/// Decode the value stored under `key` in the response body.
pub(crate) fn decode_field<T>(
    response: &RawResponse,
    key: &'static str,
) -> Result<T, BudaError>
where
    T: DeserializeOwned,
{
    let mut object = parse_object(response, key)?;
    take(&mut object, response, key, key)
}

/// Decode a paginated list stored under `key`, with its `meta` object.
pub(crate) fn decode_page<T>(
    response: &RawResponse,
    key: &'static str,
) -> Result<Page<T>, BudaError>
where
    T: DeserializeOwned,
{
    let mut object = parse_object(response, key)?;
    let items = take(&mut object, response, key, key)?;
    let meta: PageMeta = take(&mut object, response, key, "meta")?;
    Ok(Page::new(items, meta))
}

fn parse_object(
    response: &RawResponse,
    expected: &'static str,
) -> Result<Map<String, Value>, BudaError> {
    let status = response.status.as_u16();
    let value: Value = serde_json::from_str(&response.body).map_err(|e| {
        failure(
            expected,
            response,
            format!("body is not valid JSON: {e}"),
            None,
        )
    })?;

    let api_error = ApiError::from_body(&value);

    if !response.status.is_success() {
        tracing::warn!(
            expected,
            status,
            api_error = ?api_error,
            "Buda API returned an error status"
        );
        return Err(failure(
            expected,
            response,
            format!("HTTP status {}", response.status),
            api_error,
        ));
    }

    match value {
        Value::Object(object) => Ok(object),
        other => Err(failure(
            expected,
            response,
            format!("expected a JSON object, found {}", kind(&other)),
            api_error,
        )),
    }
}

fn take<T>(
    object: &mut Map<String, Value>,
    response: &RawResponse,
    expected: &'static str,
    key: &str,
) -> Result<T, BudaError>
where
    T: DeserializeOwned,
{
    let Some(value) = object.remove(key) else {
        let api_error = ApiError::from_body(&Value::Object(object.clone()));
        if let Some(api_error) = &api_error {
            tracing::warn!(expected, %api_error, "Buda API returned an error payload");
        }
        return Err(failure(
            expected,
            response,
            format!("missing key `{key}`"),
            api_error,
        ));
    };

    serde_json::from_value(value)
        .map_err(|e| failure(expected, response, format!("invalid `{key}`: {e}"), None))
}

fn failure(
    expected: &'static str,
    response: &RawResponse,
    reason: String,
    api_error: Option<ApiError>,
) -> BudaError {
    BudaError::Decode(DecodeError::new(
        expected,
        response.status.as_u16(),
        reason,
        &response.body,
        api_error,
    ))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    fn decode_error(err: BudaError) -> DecodeError {
        match err {
            BudaError::Decode(decode) => decode,
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_field() {
        let names: Vec<String> =
            decode_field(&response(200, r#"{"names":["a","b"]}"#), "names").unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_error_status_carries_api_error() {
        let err = decode_field::<Value>(&response(404, r#"{"error":"not_found"}"#), "market")
            .unwrap_err();
        let decode = decode_error(err);
        assert_eq!(decode.status, 404);
        assert_eq!(decode.expected, "market");
        assert!(decode.api_error.unwrap().is_not_found());
    }

    #[test]
    fn test_missing_key_on_success_status() {
        let err = decode_field::<Value>(
            &response(200, r#"{"message":"Not authorized","code":"forbidden"}"#),
            "balances",
        )
        .unwrap_err();
        let decode = decode_error(err);
        assert!(decode.reason.contains("balances"));
        assert_eq!(decode.api_error.unwrap().code.as_deref(), Some("forbidden"));
    }

    #[test]
    fn test_not_json() {
        let err = decode_field::<Value>(&response(502, "<html>Bad Gateway</html>"), "markets")
            .unwrap_err();
        let decode = decode_error(err);
        assert!(decode.reason.contains("not valid JSON"));
        assert!(decode.excerpt.contains("Bad Gateway"));
        assert!(decode.api_error.is_none());
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = decode_field::<Value>(&response(200, "[]"), "markets").unwrap_err();
        assert!(decode_error(err).reason.contains("an array"));
    }

    #[test]
    fn test_null_payload_is_not_an_empty_record() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Record {
            id: String,
        }

        let err = decode_field::<Record>(&response(200, r#"{"record":null}"#), "record")
            .unwrap_err();
        assert!(decode_error(err).reason.contains("invalid `record`"));
    }

    #[test]
    fn test_decode_page() {
        let body = r#"{
            "items": [1, 2],
            "meta": {"total_pages": 2, "total_count": 3, "current_page": 1}
        }"#;
        let page: Page<u32> = decode_page(&response(200, body), "items").unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.meta.has_next_page());
    }

    #[test]
    fn test_decode_page_requires_meta() {
        let err = decode_page::<u32>(&response(200, r#"{"items":[]}"#), "items").unwrap_err();
        assert!(decode_error(err).reason.contains("meta"));
    }
}
