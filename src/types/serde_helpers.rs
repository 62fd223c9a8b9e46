//! Custom serde helpers for Buda's JSON quirks.
//!
//! Buda sends some optional text fields (mostly bank account metadata) as
//! `""` instead of `null`.

use serde::{Deserialize, Deserializer};

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use buda_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Account {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     phone: Option<String>,
/// }
///
/// let account: Account = serde_json::from_str(r#"{"phone":""}"#).unwrap();
/// assert!(account.phone.is_none());
///
/// let account: Account = serde_json::from_str(r#"{"phone":"+56 9 1234"}"#).unwrap();
/// assert_eq!(account.phone.unwrap(), "+56 9 1234");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_as_none() {
        #[derive(Deserialize)]
        struct Test {
            #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
            value: Option<String>,
        }

        let test: Test = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert!(test.value.is_none());
        let test: Test = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(test.value.is_none());
        let test: Test = serde_json::from_str(r#"{"value":"x"}"#).unwrap();
        assert_eq!(test.value.as_deref(), Some("x"));
    }
}
