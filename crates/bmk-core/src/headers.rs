//! Parsing of the compact `key1=value1&key2=value2` header-string encoding
//! used to pass POST headers as a single CLI argument.

use std::collections::HashMap;
use thiserror::Error;

/// A header token that could not be split into a key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed header token {token:?}: missing '='")]
pub struct HeaderParseError {
    pub token: String,
}

/// Parses a header string into a header map.
///
/// Tokens are separated by `&`; each token is split on its first `=`, so a
/// value may itself contain `=`. Values are taken verbatim (no URL-decoding).
/// Duplicate keys keep the last occurrence. An empty string encodes zero
/// headers; any non-empty token without `=` is an error.
pub fn parse_header_string(s: &str) -> Result<HashMap<String, String>, HeaderParseError> {
    let mut headers = HashMap::new();
    if s.is_empty() {
        return Ok(headers);
    }
    for token in s.split('&') {
        match token.split_once('=') {
            Some((key, value)) => {
                headers.insert(key.to_string(), value.to_string());
            }
            None => {
                return Err(HeaderParseError {
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(headers)
}
