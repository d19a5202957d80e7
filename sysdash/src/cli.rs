//! Command line arguments.

use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sysdash",
    version,
    about = "Live CPU/memory/disk dashboard for a remote /api/metrics endpoint"
)]
pub struct Cli {
    /// Metrics server base URL (http://HOST:PORT) or full endpoint URL
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Extra CA certificate (PEM) to trust for https endpoints
    #[arg(short = 't', long = "tls-ca", value_name = "CERT_PEM")]
    pub tls_ca: Option<String>,

    /// Named connection profile to load or create
    #[arg(short = 'P', long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Overwrite an existing profile without prompting
    #[arg(long)]
    pub save: bool,

    /// Poll interval in milliseconds
    #[arg(short = 'i', long = "interval", value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Per-request timeout in milliseconds
    #[arg(long = "timeout", value_name = "MS", default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Resolve (and save) the profile, then exit without connecting
    #[arg(long)]
    pub dry_run: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
