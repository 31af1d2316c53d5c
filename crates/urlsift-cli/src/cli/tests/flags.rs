//! Tests for flag parsing and config overrides.

use super::parse;
use crate::cli::Cli;
use clap::Parser;
use std::path::Path;
use urlsift_core::config::UrlsiftConfig;

#[test]
fn cli_parse_no_flags() {
    let cli = parse(&["urlsift"]);
    assert!(cli.urls.is_none());
    assert!(cli.concurrency.is_none());
    assert!(!cli.no_errors);
    assert!(cli.timeout.is_none());
    assert!(!cli.verify_tls);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_urls_and_concurrency() {
    let cli = parse(&["urlsift", "--urls", "targets.txt", "-c", "20"]);
    assert_eq!(cli.urls.as_deref(), Some(Path::new("targets.txt")));
    assert_eq!(cli.concurrency, Some(20));
}

#[test]
fn cli_parse_nd_and_alias() {
    assert!(parse(&["urlsift", "--nd"]).no_errors);
    assert!(parse(&["urlsift", "--no-errors"]).no_errors);
}

#[test]
fn cli_parse_fetch_flags() {
    let cli = parse(&[
        "urlsift",
        "--timeout",
        "5",
        "--connect-timeout",
        "2",
        "--verify-tls",
        "--user-agent",
        "recon/2",
    ]);
    assert_eq!(cli.timeout, Some(5));
    assert_eq!(cli.connect_timeout, Some(2));
    assert!(cli.verify_tls);
    assert_eq!(cli.user_agent.as_deref(), Some("recon/2"));
}

#[test]
fn cli_rejects_zero_concurrency() {
    assert!(Cli::try_parse_from(["urlsift", "-c", "0"]).is_err());
    assert!(Cli::try_parse_from(["urlsift", "-c", "many"]).is_err());
}

#[test]
fn apply_overrides_config() {
    let cli = parse(&[
        "urlsift",
        "-c",
        "4",
        "--nd",
        "--timeout",
        "0",
        "--verify-tls",
        "--user-agent",
        "ua",
    ]);
    let mut cfg = UrlsiftConfig::default();
    cli.apply(&mut cfg);
    assert_eq!(cfg.concurrency, 4);
    assert!(cfg.suppress_errors);
    assert_eq!(cfg.fetch.timeout_secs, 0);
    assert_eq!(cfg.fetch.connect_timeout_secs, 15);
    assert!(cfg.fetch.verify_tls);
    assert_eq!(cfg.fetch.user_agent.as_deref(), Some("ua"));
}

#[test]
fn apply_without_flags_keeps_config() {
    let cli = parse(&["urlsift"]);
    let mut cfg = UrlsiftConfig {
        concurrency: 9,
        suppress_errors: true,
        ..UrlsiftConfig::default()
    };
    cli.apply(&mut cfg);
    assert_eq!(cfg.concurrency, 9);
    assert!(cfg.suppress_errors);
    assert!(!cfg.fetch.verify_tls);
}
