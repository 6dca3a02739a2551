//! Single blocking HTTPS request over libcurl.
//!
//! One `Request` is built per process invocation, performed exactly once,
//! and the full response body is accumulated in memory. The response status
//! is logged but never branched on; whatever the body was, it is the result.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// HTTP method of the one request this process sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// In-memory request description, consumed once by [`perform`].
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Resource path on the host, e.g. `/json/BTCPLN/ticker.json`.
    pub path: String,
    /// Body sent verbatim; POST only.
    pub body: Option<String>,
    /// Custom headers; POST only.
    pub headers: HashMap<String, String>,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: None,
            headers: HashMap::new(),
        }
    }

    pub fn post(path: &str, body: &str, headers: HashMap<String, String>) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body.to_string()),
            headers,
        }
    }
}

/// Failure of the one transfer, split so callers can branch on encoding
/// failure versus network failure.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Performs the request against `base_url` (scheme + authority, no trailing
/// slash) and returns the raw response body.
///
/// No timeouts are configured and redirects are not followed; libcurl's
/// defaults apply. Blocks until the transfer completes.
pub fn perform(base_url: &str, request: &Request) -> Result<Vec<u8>, RequestError> {
    let url = format!("{}{}", base_url, request.path);

    let mut easy = curl::easy::Easy::new();
    easy.url(&url)?;
    if request.method == Method::Post {
        easy.post(true)?;
        let body = request.body.as_deref().unwrap_or("");
        easy.post_fields_copy(body.as_bytes())?;
    }

    if !request.headers.is_empty() {
        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k, v))?;
        }
        easy.http_headers(list)?;
    }

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    match easy.response_code() {
        Ok(code) => tracing::debug!("{} {} returned HTTP {}", request.method, url, code),
        Err(e) => tracing::debug!("{} {}: no response code ({})", request.method, url, e),
    }

    Ok(body)
}

/// Decodes the response body as UTF-8 text.
pub fn decode(body: Vec<u8>) -> Result<String, RequestError> {
    Ok(String::from_utf8(body)?)
}
