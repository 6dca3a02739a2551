//! Request dispatcher: perform one request, decode the body, persist it.
//!
//! Host and capture path are explicit parameters (defaulted from config by
//! the CLI) so the dispatcher can be pointed at a mock endpoint in tests.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::capture;
use crate::request::{self, Request};

/// Issues exactly one request and writes the decoded response body to the
/// capture file.
pub struct Dispatcher {
    base_url: String,
    output: PathBuf,
}

impl Dispatcher {
    /// Dispatcher for an HTTPS host, e.g. `www.bitmarket.pl`.
    pub fn new(host: &str, output: &Path) -> Self {
        Self::with_base_url(format!("https://{}", host), output)
    }

    /// Dispatcher for an explicit base URL (scheme included). Lets tests
    /// target a plain-HTTP mock server.
    pub fn with_base_url(base_url: String, output: &Path) -> Self {
        Self {
            base_url,
            output: output.to_path_buf(),
        }
    }

    /// Perform the request, decode the body as UTF-8 and write it to the
    /// capture file. Any failure leaves the capture file untouched.
    pub fn run(&self, request: &Request) -> Result<String> {
        tracing::info!("{} {}{}", request.method, self.base_url, request.path);
        let body = request::perform(&self.base_url, request)?;
        let text = request::decode(body)?;
        capture::write_capture(&self.output, &text)?;
        Ok(text)
    }
}
