//! Tests for the raw dispatcher form: `bmk <path> [<body> <headers>]`.

use super::{parse, parse_err};
use std::path::Path;

#[test]
fn cli_parse_get_form() {
    let cli = parse(&["bmk", "/API/0/feed"]);
    assert_eq!(cli.path.as_deref(), Some("/API/0/feed"));
    assert!(cli.body.is_none());
    assert!(cli.headers.is_none());
    assert!(cli.command.is_none());
}

#[test]
fn cli_parse_post_form() {
    let cli = parse(&["bmk", "/api2/", "method=info&tonce=1", "tonce=1&apikey=abc"]);
    assert_eq!(cli.path.as_deref(), Some("/api2/"));
    assert_eq!(cli.body.as_deref(), Some("method=info&tonce=1"));
    assert_eq!(cli.headers.as_deref(), Some("tonce=1&apikey=abc"));
}

#[test]
fn cli_body_without_headers_is_rejected() {
    // Two payload arguments are an invalid argument count.
    parse_err(&["bmk", "/api2/", "method=info"]);
}

#[test]
fn cli_too_many_payload_arguments_rejected() {
    parse_err(&["bmk", "/a", "b", "h=1", "extra"]);
}

#[test]
fn cli_parse_host_and_output_overrides() {
    let cli = parse(&[
        "bmk",
        "--host",
        "localhost:8080",
        "--output",
        "/tmp/resp",
        "/API/0/feed",
    ]);
    assert_eq!(cli.host.as_deref(), Some("localhost:8080"));
    assert_eq!(cli.output.as_deref(), Some(Path::new("/tmp/resp")));
    assert_eq!(cli.path.as_deref(), Some("/API/0/feed"));
}

#[test]
fn cli_no_arguments_parses_to_empty_invocation() {
    // Rejected later in run() with exit status 1; clap itself accepts it.
    let cli = parse(&["bmk"]);
    assert!(cli.path.is_none());
    assert!(cli.command.is_none());
}
