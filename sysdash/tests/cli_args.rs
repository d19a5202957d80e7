//! CLI arg parsing tests for sysdash
use assert_cmd::Command;
use clap::Parser;
use sysdash::cli::Cli;

#[test]
fn test_help_mentions_short_and_long_flags() {
    let result = Command::cargo_bin("sysdash")
        .expect("sysdash binary built")
        .arg("--help")
        .assert()
        .success();
    let output = result.get_output();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        text.contains("Usage:")
            && text.contains("--tls-ca")
            && text.contains("-t")
            && text.contains("--profile")
            && text.contains("-P")
            && text.contains("--interval"),
        "help text missing expected flags\n{text}"
    );
}

#[test]
fn test_short_and_long_forms_parse_the_same() {
    let long = Cli::try_parse_from([
        "sysdash",
        "--tls-ca",
        "/tmp/cert.pem",
        "--profile",
        "dev",
        "--interval",
        "500",
        "http://host:5000",
    ])
    .unwrap();
    let short = Cli::try_parse_from([
        "sysdash",
        "-t",
        "/tmp/cert.pem",
        "-P",
        "dev",
        "-i",
        "500",
        "http://host:5000",
    ])
    .unwrap();
    for c in [&long, &short] {
        assert_eq!(c.tls_ca.as_deref(), Some("/tmp/cert.pem"));
        assert_eq!(c.profile.as_deref(), Some("dev"));
        assert_eq!(c.interval_ms, Some(500));
        assert_eq!(c.url.as_deref(), Some("http://host:5000"));
    }
    assert_eq!(long.timeout_ms, 5000);
}

#[test]
fn test_equals_form_and_verbosity() {
    let c = Cli::try_parse_from(["sysdash", "--tls-ca=/x.pem", "--profile=lab", "-vv"]).unwrap();
    assert_eq!(c.tls_ca.as_deref(), Some("/x.pem"));
    assert_eq!(c.profile.as_deref(), Some("lab"));
    assert_eq!(c.verbose, 2);
    assert!(c.url.is_none());
}

#[test]
fn test_zero_interval_rejected() {
    assert!(Cli::try_parse_from(["sysdash", "-i", "0", "http://h"]).is_err());
}

#[test]
fn test_extra_positional_rejected() {
    assert!(Cli::try_parse_from(["sysdash", "http://a", "http://b"]).is_err());
}
