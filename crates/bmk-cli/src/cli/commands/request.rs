//! Raw request dispatch: the `bmk <path> [<body> <headers>]` form.

use anyhow::{bail, Result};
use bmk_core::dispatcher::Dispatcher;
use bmk_core::headers::parse_header_string;
use bmk_core::request::Request;
use std::path::Path;

/// Issue one GET (no body) or POST (body plus header string) and write the
/// response body to the capture file.
pub fn run_request(
    host: &str,
    output: &Path,
    path: &str,
    body: Option<&str>,
    header_string: Option<&str>,
) -> Result<()> {
    let request = match (body, header_string) {
        (None, None) => Request::get(path),
        (Some(body), Some(header_string)) => {
            // Parse before touching the network; a malformed header string
            // must fail without sending anything.
            let headers = parse_header_string(header_string)?;
            Request::post(path, body, headers)
        }
        _ => bail!("BODY and HEADERS must be given together"),
    };

    let dispatcher = Dispatcher::new(host, output);
    let text = dispatcher.run(&request)?;
    tracing::debug!("captured {} bytes from {}", text.len(), path);
    Ok(())
}
